//! Error types for taproot operations.
//!
//! Detection itself never fails: a detector without signal returns an empty
//! result and filesystem trouble degrades to best-effort fallbacks. Errors
//! exist only at the configuration boundary.

/// All errors that can occur in taproot operations.
#[derive(Debug, thiserror::Error)]
pub enum RootError {
    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("JSON parsing error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using RootError.
pub type Result<T> = std::result::Result<T, RootError>;
