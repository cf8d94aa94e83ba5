//! Glif: run Glifs from an agent host
//!
//! Resolves the Glif API settings, posts a run request with bearer
//! authentication, and turns the result into a chat reply with an optional
//! media attachment.

pub mod action;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod reply;
pub mod tooling;

pub use action::{glif_plugin, Action, HandlerOptions, Message, Plugin, RunGlifAction};
pub use client::{GlifClient, GlifInputs, GlifInvoker, GlifResult, RunRequest};
pub use config::{ConfigError, ConfigResolver, GlifConfig, SettingSource};
pub use error::GlifError;
pub use reply::{Attachment, Reply, ResponseAdapter};
