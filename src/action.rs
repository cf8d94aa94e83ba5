//! Host Actions
//!
//! The contract a host agent runtime dispatches through, the `RUN_GLIF` action
//! implementing it, and the `glif` plugin descriptor that registers it.

pub mod contract;
pub mod plugin;
pub mod run_glif;

pub use contract::{
    Action, ActionExample, ExampleContent, ExampleMessage, HandlerOptions, Message, ReplyCallback,
};
pub use plugin::{glif_plugin, glif_plugin_with, Plugin};
pub use run_glif::{RunDefaults, RunGlifAction, DEFAULT_GLIF_ID, DEFAULT_PROMPT};
