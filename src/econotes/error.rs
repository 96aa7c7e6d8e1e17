use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Suggestion request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, EcoError>;
