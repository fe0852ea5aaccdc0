//! Error types for the test harness

use thiserror::Error;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors that can occur while driving the test harness
#[derive(Debug, Error)]
pub enum HarnessError {
    /// No page has been rendered and no request processed yet
    #[error("no response has been captured; start a page or process a request first")]
    NoResponse,

    /// The captured body cannot be read as text
    #[error("response body is not valid UTF-8")]
    NonUtf8Body(#[from] std::string::FromUtf8Error),

    /// The mock request could not be turned into an HTTP request
    #[error("failed to build mock request for [{url}]: {message}")]
    InvalidRequest { url: String, message: String },

    /// The router failed to produce a response
    #[error("failed to dispatch request: {message}")]
    Dispatch { message: String },

    /// The response body could not be collected
    #[error("failed to read response body: {message}")]
    Body { message: String },

    /// A component was attached but its placeholder is missing from the markup
    #[error("no element with data-component-id=\"{id}\" found in page markup")]
    UnboundComponent { id: String },

    /// A placeholder element's start tag has no matching close tag
    #[error("placeholder element <{tag}> for component \"{id}\" is never closed")]
    UnclosedPlaceholder { id: String, tag: String },
}
