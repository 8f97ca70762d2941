use thiserror::Error;

#[derive(Debug, Error)]
pub enum SizesError {
    #[error("invalid rule pattern `{pattern}`: {reason}")]
    InvalidRule { pattern: String, reason: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, SizesError>;
