//! Error type for the assertion façade

use pagecheck_harness::HarnessError;
use pagecheck_markup::MarkupError;
use thiserror::Error;

/// Result type for testkit operations
pub type TestkitResult<T> = Result<T, TestkitError>;

/// Infrastructure failures the assertion helpers can hit before any
/// expectation is checked.
///
/// Expectation mismatches themselves panic with a diagnostic message, like
/// any other test assertion; these errors cover the plumbing around them
/// (missing response, unparseable XPath, request build failures) so tests
/// can propagate them with `?`.
#[derive(Debug, Error)]
pub enum TestkitError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Harness(#[from] HarnessError),
}
