use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErrmapError>;

#[derive(Error, Debug)]
pub enum ErrmapError {
    #[error("Unsupported message type: {0}, want string or null")]
    UnsupportedMessage(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
