//! Content Errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid link in {field} ({value}): {reason}")]
    InvalidLink {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Empty content field: {field}")]
    EmptyField { field: String },

    #[error("Invalid carousel settings: {reason}")]
    InvalidCarousel { reason: String },
}

pub type Result<T> = std::result::Result<T, ContentError>;
