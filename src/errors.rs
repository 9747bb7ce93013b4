/*!
 * Error types for the tirgul library.
 *
 * This module contains custom error types for the exercise generation
 * pipeline, using the thiserror crate for ergonomic error definitions.
 * The pipeline itself degrades through fallback chains instead of
 * failing, so the error surface is intentionally small.
 */

use thiserror::Error;

/// Errors that can occur during exercise generation
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The article carries no usable text at all
    #[error("article has no usable text: title and body are both empty")]
    EmptyArticle,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error while parsing an article input file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error from the generation pipeline
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
