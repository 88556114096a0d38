//! Loading the question dataset from JSON.

use std::path::Path;

use quiz_core::model::Dataset;

use crate::repository::StorageError;

/// Parse a dataset from a JSON array of question records.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the JSON is malformed or a record
/// fails validation.
pub fn parse_questions(json: &str) -> Result<Dataset, StorageError> {
    serde_json::from_str(json).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Read and parse a dataset file.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read, or
/// `StorageError::Serialization` if it cannot be parsed.
pub fn load_questions(path: impl AsRef<Path>) -> Result<Dataset, StorageError> {
    let raw = std::fs::read_to_string(path)?;
    parse_questions(&raw)
}
