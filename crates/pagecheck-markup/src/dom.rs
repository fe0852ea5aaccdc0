//! Tolerant markup-to-DOM conversion

use crate::error::{MarkupError, MarkupResult};
use skyscraper::html::{self, HtmlDocument};

/// Parse rendered markup into a queryable DOM.
///
/// The parser is tolerant of sloppy HTML (unclosed tags, stray end tags,
/// unquoted attributes), so a document that fails markup validation can
/// still be parsed and queried with XPath.
pub fn parse_markup(text: &str) -> MarkupResult<HtmlDocument> {
    html::parse(text).map_err(|e| MarkupError::Parse {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_document() {
        let doc = parse_markup("<html><head></head><body><p>hi</p></body></html>");
        assert!(doc.is_ok());
    }

    #[test]
    fn test_parse_sloppy_document() {
        // Unclosed <li> elements are recovered, not rejected
        let doc = parse_markup("<html><body><ul><li>one<li>two</ul></body></html>");
        assert!(doc.is_ok());
    }
}
