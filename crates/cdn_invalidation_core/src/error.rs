use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidationError {
    /// The target distribution is not configured. Raised before any record is
    /// processed.
    #[error("{0}")]
    Configuration(String),

    #[error("malformed change event: {0}")]
    MalformedEvent(String),

    #[error("failed to decode object key '{key}': {reason}")]
    Decoding { key: String, reason: String },

    /// The CDN control plane rejected the request or could not be reached.
    #[error("{0}")]
    Provider(String),
}

impl InvalidationError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::MalformedEvent(_) => "malformed_event",
            Self::Decoding { .. } => "decoding_error",
            Self::Provider(_) => "provider_error",
        }
    }
}
