//! Error types for markup parsing and querying

use thiserror::Error;

/// Result type for markup operations
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors that can occur while parsing or querying markup
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The tolerant HTML parser could not recover a document
    #[error("failed to parse markup: {message}")]
    Parse { message: String },

    /// The XPath expression itself is not well-formed
    #[error("invalid XPath expression [{expression}]: {message}")]
    Xpath { expression: String, message: String },

    /// A well-formed XPath expression failed during evaluation
    #[error("failed to evaluate XPath expression [{expression}]: {message}")]
    XpathEvaluation { expression: String, message: String },
}
