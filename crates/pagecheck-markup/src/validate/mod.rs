//! Markup validators
//!
//! Both validators share the same contract: feed them a document with
//! [`DocumentValidator::parse`], then ask [`DocumentValidator::is_valid`]
//! and collect formatted error reports from [`DocumentValidator::errors`].
//! Errors that carry a source line are rendered with a configurable number
//! of surrounding context lines.

mod html5;
mod xhtml;

pub use html5::Html5Validator;
pub use xhtml::XhtmlValidator;

/// Default number of source lines shown around each positioned error
pub const DEFAULT_CONTEXT_LINES: usize = 5;

/// A single problem found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// 1-based source line, when the underlying parser reports a position
    pub line: Option<usize>,
    /// Parser-supplied description of the problem
    pub message: String,
}

/// Common contract for markup validators
pub trait DocumentValidator {
    /// Parse the document and collect any errors
    fn parse(&mut self, document: &str);

    /// True when the last parsed document produced no errors
    fn is_valid(&self) -> bool;

    /// Formatted reports for every collected error
    fn errors(&self) -> Vec<String>;

    /// Override how many lines of source context each report includes
    fn set_context_lines(&mut self, lines: usize);
}

/// Shared bookkeeping for both validators
#[derive(Debug)]
pub(crate) struct ValidatorState {
    errors: Vec<ValidationError>,
    source: String,
    context_lines: usize,
}

impl ValidatorState {
    pub(crate) fn new() -> Self {
        Self {
            errors: Vec::new(),
            source: String::new(),
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }

    /// Reset for a new document
    pub(crate) fn begin(&mut self, document: &str) {
        self.errors.clear();
        self.source = document.to_string();
    }

    pub(crate) fn push(&mut self, line: Option<usize>, message: impl Into<String>) {
        self.errors.push(ValidationError {
            line,
            message: message.into(),
        });
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn set_context_lines(&mut self, lines: usize) {
        self.context_lines = lines;
    }

    pub(crate) fn formatted_errors(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format_error(e, &self.source, self.context_lines))
            .collect()
    }
}

/// Render one error, with surrounding source lines when a position is known.
///
/// The offending line is marked with `->`; line numbers are 1-based.
fn format_error(error: &ValidationError, source: &str, context: usize) -> String {
    let Some(line) = error.line else {
        return error.message.clone();
    };

    let mut report = format!("line {}: {}", line, error.message);
    if context == 0 {
        return report;
    }

    let lines: Vec<&str> = source.lines().collect();
    let first = line.saturating_sub(context).max(1);
    let last = (line + context).min(lines.len().max(1));

    for number in first..=last {
        let Some(text) = lines.get(number - 1) else {
            break;
        };
        let marker = if number == line { "->" } else { "  " };
        report.push_str(&format!("\n{} {:>4} | {}", marker, number, text));
    }
    report
}
