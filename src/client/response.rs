use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw result of a Glif run, decoded as-is.
///
/// Missing fields decode to their defaults; `output` and `outputFull` are kept
/// as untyped JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlifResult {
    #[serde(default)]
    pub id: String,

    /// Inputs as echoed back by the API.
    #[serde(default)]
    pub inputs: Value,

    #[serde(default)]
    pub output: Value,

    #[serde(default)]
    pub output_full: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GlifResult {
    /// Domain-level failure reported by the API, if any. Empty strings do not count.
    pub fn failure(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    /// `output` as display text: strings verbatim, anything else as compact JSON.
    pub fn output_text(&self) -> String {
        match &self.output {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
