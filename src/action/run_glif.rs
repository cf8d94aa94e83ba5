//! The `RUN_GLIF` action.

use super::contract::{
    Action, ActionExample, ExampleContent, ExampleMessage, HandlerOptions, Message, ReplyCallback,
};
use crate::client::{GlifClient, GlifInputs, GlifInvoker, RunRequest};
use crate::config::{ConfigResolver, SettingSource};
use crate::error::GlifError;
use crate::reply::{Reply, ResponseAdapter};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

pub const ACTION_NAME: &str = "RUN_GLIF";

const SIMILES: &[&str] = &["EXECUTE_GLIF", "USE_GLIF", "GLIF_GENERATE"];

const DESCRIPTION: &str = "Run a Glif with specified inputs";

/// Glif run when neither the call nor the deployment names one.
pub const DEFAULT_GLIF_ID: &str = "cm3v80ldx002a3hfq6gvolzcp";

/// Prompt sent when the call carries no inputs.
pub const DEFAULT_PROMPT: &str =
    "Sam Bankman-Fried tweets about the potential of on-chain AI agents";

/// Deployment-level defaults for building a run request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDefaults {
    pub glif_id: String,
    pub prompt: String,
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            glif_id: DEFAULT_GLIF_ID.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

pub struct RunGlifAction {
    resolver: ConfigResolver,
    invoker: Arc<dyn GlifInvoker>,
    adapter: ResponseAdapter,
    defaults: RunDefaults,
    examples: Vec<ActionExample>,
}

impl Default for RunGlifAction {
    fn default() -> Self {
        Self::new()
    }
}

impl RunGlifAction {
    pub fn new() -> Self {
        Self {
            resolver: ConfigResolver::new(),
            invoker: Arc::new(GlifClient::new()),
            adapter: ResponseAdapter::new(),
            defaults: RunDefaults::default(),
            examples: default_examples(),
        }
    }

    pub fn with_resolver(mut self, resolver: ConfigResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_invoker(mut self, invoker: Arc<dyn GlifInvoker>) -> Self {
        self.invoker = invoker;
        self
    }

    pub fn with_adapter(mut self, adapter: ResponseAdapter) -> Self {
        self.adapter = adapter;
        self
    }

    pub fn with_defaults(mut self, defaults: RunDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Build the run request from the call options, filling gaps from the
    /// deployment defaults. The message text is never sent as an input.
    pub fn build_request(&self, options: &HandlerOptions) -> Result<RunRequest, GlifError> {
        let glif_id = options
            .glif_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| self.defaults.glif_id.clone());

        let inputs = options
            .inputs
            .clone()
            .unwrap_or_else(|| GlifInputs::single(self.defaults.prompt.clone()));

        RunRequest::new(glif_id, inputs)
    }

    async fn run(
        &self,
        runtime: &dyn SettingSource,
        options: &HandlerOptions,
    ) -> Result<Reply, GlifError> {
        let config = self.resolver.resolve(runtime)?;
        let request = self.build_request(options)?;
        let result = self.invoker.run(&request, &config).await?;
        self.adapter.adapt(result)
    }
}

#[async_trait]
impl Action for RunGlifAction {
    fn name(&self) -> &str {
        ACTION_NAME
    }

    fn similes(&self) -> &[&'static str] {
        SIMILES
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn examples(&self) -> &[ActionExample] {
        &self.examples
    }

    async fn validate(&self, runtime: &dyn SettingSource, _message: &Message) -> bool {
        match self.resolver.resolve(runtime) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "RUN_GLIF not available");
                false
            }
        }
    }

    async fn handle(
        &self,
        runtime: &dyn SettingSource,
        message: &Message,
        options: &HandlerOptions,
        callback: &mut dyn ReplyCallback,
    ) {
        info!(user = %message.user, text = %message.text, "Running Glif with message");

        let reply = match self.run(runtime, options).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Glif generation failed");
                self.adapter.failure_reply(&e)
            }
        };
        callback.send(reply);
    }
}

fn default_examples() -> Vec<ActionExample> {
    vec![vec![
        ExampleMessage {
            user: "{{user1}}".to_string(),
            content: ExampleContent {
                text: "Run Glif with prompt: a cute robot".to_string(),
                action: None,
            },
        },
        ExampleMessage {
            user: "{{agentName}}".to_string(),
            content: ExampleContent {
                text: "Here's the Glif output".to_string(),
                action: Some(ACTION_NAME.to_string()),
            },
        },
    ]]
}
