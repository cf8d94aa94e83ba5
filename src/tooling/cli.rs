//! CLI Tooling
//!
//! Command-line host for the `RUN_GLIF` action: settings come from an optional
//! settings file, with the process environment as fallback.

use crate::action::{Action, HandlerOptions, Message, RunDefaults, RunGlifAction};
use crate::client::GlifInputs;
use crate::config::{ConfigResolver, FileSettings, MapSettings, SettingSource};
use crate::error::GlifError;
use crate::reply::Reply;
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use std::path::PathBuf;
use tracing::info;

/// Glif CLI - run Glifs and print the reply an agent would send
#[derive(Parser)]
#[command(name = "glif")]
#[command(about = "Run Glifs via the Glif API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Host settings file (TOML, YAML or JSON) consulted before the environment
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a glif and print the reply
    Run {
        /// Glif to run (defaults to the deployment glif)
        #[arg(long)]
        glif_id: Option<String>,
        /// Positional input value (repeatable)
        #[arg(long = "input", conflicts_with = "named")]
        inputs: Vec<String>,
        /// Named input as KEY=VALUE (repeatable)
        #[arg(long, value_parser = parse_key_value)]
        named: Vec<(String, String)>,
        /// Text of the triggering message (logged, never sent as input)
        #[arg(long)]
        message: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Check whether the RUN_GLIF action can run with the current settings
    Validate,
    /// Show the resolved configuration (token redacted)
    Config {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// Settings, resolver and action shared by every command.
pub struct CliContext {
    settings: Box<dyn SettingSource>,
    resolver: ConfigResolver,
    action: RunGlifAction,
}

impl CliContext {
    /// Create a CLI context, loading the settings file when one is given.
    pub fn new(settings_path: Option<PathBuf>) -> Result<Self, GlifError> {
        let settings: Box<dyn SettingSource> = match settings_path {
            Some(path) => Box::new(FileSettings::load(&path)?),
            None => Box::new(MapSettings::new()),
        };
        Ok(Self::with_components(
            settings,
            ConfigResolver::new(),
            RunGlifAction::new(),
        ))
    }

    pub fn with_components(
        settings: Box<dyn SettingSource>,
        resolver: ConfigResolver,
        action: RunGlifAction,
    ) -> Self {
        Self {
            settings,
            resolver,
            action,
        }
    }

    pub fn with_defaults(mut self, defaults: RunDefaults) -> Self {
        self.action = self.action.with_defaults(defaults);
        self
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, GlifError> {
        match command {
            Commands::Run {
                glif_id,
                inputs,
                named,
                message,
                format,
            } => {
                let options = HandlerOptions {
                    glif_id: glif_id.clone(),
                    inputs: cli_inputs(inputs, named),
                };
                let message = Message::new("cli", message.clone().unwrap_or_default());
                let reply = self.run_action(&message, &options)?;
                format_reply(&reply, format)
            }
            Commands::Validate => {
                let rt = runtime()?;
                let ready = rt.block_on(self.action.validate(self.settings.as_ref(), &Message::default()));
                if ready {
                    Ok(format!("{}: ready", self.action.name()))
                } else {
                    let reason = self
                        .resolver
                        .resolve(self.settings.as_ref())
                        .err()
                        .map(|e| e.to_string())
                        .unwrap_or_default();
                    Ok(format!("{}: not available\n{}", self.action.name(), reason))
                }
            }
            Commands::Config { format } => {
                let config = self.resolver.resolve(self.settings.as_ref())?;
                let summary = config.summary();
                if format == "json" {
                    serde_json::to_string_pretty(&summary)
                        .map_err(|e| GlifError::InvalidResponse(e.to_string()))
                } else {
                    Ok(format!(
                        "api_token:   {}\napi_url:     {}\nstrict_mode: {}",
                        summary.api_token, summary.api_url, summary.strict_mode
                    ))
                }
            }
        }
    }

    fn run_action(&self, message: &Message, options: &HandlerOptions) -> Result<Reply, GlifError> {
        let rt = runtime()?;
        let mut delivered = None;
        let mut callback = |reply: Reply| delivered = Some(reply);
        rt.block_on(
            self.action
                .handle(self.settings.as_ref(), message, options, &mut callback),
        );
        info!(delivered = delivered.is_some(), "RUN_GLIF finished");
        delivered.ok_or_else(|| GlifError::InvalidResponse("no reply was delivered".to_string()))
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, GlifError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| GlifError::RequestFailed(format!("Failed to create runtime: {}", e)))
}

fn cli_inputs(inputs: &[String], named: &[(String, String)]) -> Option<GlifInputs> {
    if !named.is_empty() {
        let named: IndexMap<String, String> = named.iter().cloned().collect();
        Some(GlifInputs::Named(named))
    } else if !inputs.is_empty() {
        Some(GlifInputs::Positional(inputs.to_vec()))
    } else {
        None
    }
}

fn format_reply(reply: &Reply, format: &str) -> Result<String, GlifError> {
    if format == "json" {
        return serde_json::to_string_pretty(reply)
            .map_err(|e| GlifError::InvalidResponse(e.to_string()));
    }
    let mut out = reply.text.clone();
    for attachment in reply.attachments.iter().flatten() {
        out.push_str(&format!(
            "\n[{}] {} ({})",
            attachment.title, attachment.url, attachment.id
        ));
    }
    Ok(out)
}
