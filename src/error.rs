//! Error type shared by the client modules.
//!
//! Missing DOM elements and unparsable response bodies are not errors; the
//! page degrades around them. Only conditions a caller may want to log or
//! surface end up here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request encode failed: {0}")]
    Encode(String),
    #[error("storage write failed: {0}")]
    Storage(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for UiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e.to_string())
    }
}
