//! Replies
//!
//! Turns a Glif result, or any failure along the way, into the chat reply the
//! host shows to the user.

use crate::client::GlifResult;
use crate::error::GlifError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const FAILURE_PREFIX: &str = "Failed to run Glif: ";

/// Reply sent back to the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: None,
        }
    }
}

/// Generated media referenced from a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub url: String,
    pub title: String,
    pub source: String,
    pub description: String,
    pub text: String,
}

/// Fixed labels stamped on every generated attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentLabels {
    pub title: String,
    pub source: String,
    pub description: String,
}

impl Default for AttachmentLabels {
    fn default() -> Self {
        Self {
            title: "Glif Generation".to_string(),
            source: "glifGeneration".to_string(),
            description: "Glif Generation".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponseAdapter {
    labels: AttachmentLabels,
}

impl ResponseAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(labels: AttachmentLabels) -> Self {
        Self { labels }
    }

    /// Map a successful transport result to a reply.
    ///
    /// A result carrying `error` fails with [`GlifError::LogicError`]. Output
    /// starting with `http` is treated as media and attached once.
    pub fn adapt(&self, result: GlifResult) -> Result<Reply, GlifError> {
        if let Some(message) = result.failure() {
            return Err(GlifError::LogicError(message.to_string()));
        }

        let text = result.output_text();
        let attachments = text.starts_with("http").then(|| {
            vec![Attachment {
                id: Uuid::new_v4().to_string(),
                url: text.clone(),
                title: self.labels.title.clone(),
                source: self.labels.source.clone(),
                description: self.labels.description.clone(),
                text: text.clone(),
            }]
        });

        Ok(Reply { text, attachments })
    }

    /// Reply for a failed run; never carries attachments.
    pub fn failure_reply(&self, error: &GlifError) -> Reply {
        Reply::text(format!("{}{}", FAILURE_PREFIX, error))
    }

    /// Collapse the whole chain's outcome into one reply.
    pub fn reply_for(&self, outcome: Result<GlifResult, GlifError>) -> Reply {
        match outcome.and_then(|result| self.adapt(result)) {
            Ok(reply) => reply,
            Err(error) => self.failure_reply(&error),
        }
    }
}
