use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request never completed (network unreachable, CORS, aborted)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but its body was not what the endpoint promises
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("No trigger selected")]
    NoTriggerSelected,

    #[error("Download error: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
