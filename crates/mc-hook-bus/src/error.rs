//! Listener error types.

use thiserror::Error;

/// Returned by a fallible listener. The bus logs it and keeps dispatching.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ListenerError {
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl From<String> for ListenerError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for ListenerError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<serde_json::Error> for ListenerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Source(Box::new(err))
    }
}
