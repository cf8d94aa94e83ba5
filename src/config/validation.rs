use thiserror::Error;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted path of the offending setting.
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn required(path: impl Into<String>) -> Self {
        Self::new(path, "Required")
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more settings failed validation.
    #[error("Glif configuration validation failed:\n{}", join_issues(.0))]
    Validation(Vec<FieldIssue>),

    /// A setting source could not be read at all.
    #[error("{0}")]
    Source(String),
}

impl ConfigError {
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ConfigError::Validation(issues) => issues,
            ConfigError::Source(_) => &[],
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(FieldIssue::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
