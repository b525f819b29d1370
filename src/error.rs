//! Error handling for the career adviser application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerAdviserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Text normalization error: {0}")]
    Normalization(String),

    #[error("Skill matching error: {0}")]
    Matching(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CareerAdviserError>;
