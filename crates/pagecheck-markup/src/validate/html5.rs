//! HTML5 validation backed by the html5ever parser

use super::{DocumentValidator, ValidatorState};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;

/// Validates a document against the HTML5 parsing rules.
///
/// Every parse error the html5ever tokenizer/tree-builder emits is recorded
/// as a validation error. html5ever reports errors as bare messages without
/// source positions, so these render without line context.
pub struct Html5Validator {
    state: ValidatorState,
}

impl Html5Validator {
    pub fn new() -> Self {
        Self {
            state: ValidatorState::new(),
        }
    }
}

impl Default for Html5Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentValidator for Html5Validator {
    fn parse(&mut self, document: &str) {
        self.state.begin(document);

        if !document.to_ascii_lowercase().contains("<!doctype") {
            self.state
                .push(None, "document has no doctype declaration");
        }

        let dom = parse_document(RcDom::default(), Default::default()).one(document);
        for error in dom.errors {
            self.state.push(None, error.into_owned());
        }
    }

    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn errors(&self) -> Vec<String> {
        self.state.formatted_errors()
    }

    fn set_context_lines(&mut self, lines: usize) {
        self.state.set_context_lines(lines);
    }
}
