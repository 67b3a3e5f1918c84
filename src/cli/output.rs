//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ProcessingError;

/// Map domain errors to the message printed on stderr.
pub fn map_error(e: &ProcessingError) -> String {
    match e {
        ProcessingError::InputNotFound(_) => format!(
            "Error processing the file: {}\nPaths may be relative to the current directory or absolute.",
            e
        ),
        ProcessingError::Config(_) | ProcessingError::Prompt(_) => e.to_string(),
        _ => format!("Error processing the file: {}", e),
    }
}
