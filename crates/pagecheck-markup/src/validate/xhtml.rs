//! XHTML validation backed by a streaming XML reader

use super::{DocumentValidator, ValidatorState};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Validates a document as well-formed XML.
///
/// The document is streamed through a `quick_xml::Reader`; the first
/// well-formedness failure (mismatched end tag, bad attribute syntax,
/// unclosed element) is recorded with the line it occurred on. XML errors
/// are fatal, so reading stops at the first one.
pub struct XhtmlValidator {
    state: ValidatorState,
}

impl XhtmlValidator {
    pub fn new() -> Self {
        Self {
            state: ValidatorState::new(),
        }
    }
}

impl Default for XhtmlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentValidator for XhtmlValidator {
    fn parse(&mut self, document: &str) {
        self.state.begin(document);

        let mut reader = Reader::from_str(document);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    let offset = (reader.error_position() as usize).min(document.len());
                    let line = document.as_bytes()[..offset]
                        .iter()
                        .filter(|&&b| b == b'\n')
                        .count()
                        + 1;
                    self.state
                        .push(Some(line), format!("not well-formed: {}", e));
                    break;
                }
            }
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
