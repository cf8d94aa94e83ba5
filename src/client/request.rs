use crate::error::GlifError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inputs for a run: either positional values or values keyed by input name.
///
/// Serialized untagged, so the wire form is a plain JSON array or object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GlifInputs {
    Positional(Vec<String>),
    Named(IndexMap<String, String>),
}

impl GlifInputs {
    pub fn single(value: impl Into<String>) -> Self {
        GlifInputs::Positional(vec![value.into()])
    }
}

impl From<Vec<String>> for GlifInputs {
    fn from(values: Vec<String>) -> Self {
        GlifInputs::Positional(values)
    }
}

impl From<IndexMap<String, String>> for GlifInputs {
    fn from(values: IndexMap<String, String>) -> Self {
        GlifInputs::Named(values)
    }
}

/// Body of `POST <api_url>`: `{ "id": ..., "inputs": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRequest {
    id: String,
    inputs: GlifInputs,
}

impl RunRequest {
    pub fn new(glif_id: impl Into<String>, inputs: impl Into<GlifInputs>) -> Result<Self, GlifError> {
        let id = glif_id.into();
        if id.trim().is_empty() {
            return Err(GlifError::InvalidRequest(
                "Glif ID cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            inputs: inputs.into(),
        })
    }

    pub fn glif_id(&self) -> &str {
        &self.id
    }

    pub fn inputs(&self) -> &GlifInputs {
        &self.inputs
    }
}
