use crate::client::GlifInputs;
use crate::config::SettingSource;
use crate::reply::Reply;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Incoming conversation message that triggered an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub user: String,
    pub text: String,
}

impl Message {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
        }
    }
}

/// Per-call overrides passed by the host alongside the message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glif_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<GlifInputs>,
}

/// One turn of an example conversation shown to the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleMessage {
    pub user: String,
    pub content: ExampleContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

pub type ActionExample = Vec<ExampleMessage>;

/// Receives the reply of an action run. Called once per run.
pub trait ReplyCallback: Send {
    fn send(&mut self, reply: Reply);
}

impl<F> ReplyCallback for F
where
    F: FnMut(Reply) + Send,
{
    fn send(&mut self, reply: Reply) {
        self(reply)
    }
}

/// An action the host runtime can dispatch to.
///
/// `runtime` is the host's named-setting lookup.
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &str;

    /// Alternative names the planner may use for this action.
    fn similes(&self) -> &[&'static str];

    fn description(&self) -> &str;

    fn examples(&self) -> &[ActionExample];

    /// Whether the action can run at all in this host.
    async fn validate(&self, runtime: &dyn SettingSource, message: &Message) -> bool;

    /// Run the action and deliver its reply through `callback`.
    async fn handle(
        &self,
        runtime: &dyn SettingSource,
        message: &Message,
        options: &HandlerOptions,
        callback: &mut dyn ReplyCallback,
    );
}
