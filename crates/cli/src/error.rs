use planner::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the criteria file: {0}")]
    InputRead(#[from] std::io::Error),

    #[error("Failed to deserialize the criteria file as JSON: {0}")]
    InputDeserialize(#[from] serde_json::Error),

    #[error("Failed to compile criteria: {0}")]
    Compile(#[from] FilterError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Invalid dialect provided: {0}")]
    InvalidDialect(String),
}
