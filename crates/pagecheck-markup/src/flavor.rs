//! Doctype sniffing and validator selection

use crate::validate::{DocumentValidator, Html5Validator, XhtmlValidator};

/// The markup flavor a document appears to be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupFlavor {
    Html5,
    Xhtml,
}

/// Decide whether a document is HTML5 or XHTML.
///
/// A document is HTML5 when the exact string `<!DOCTYPE html>` occurs
/// before the opening `<html` element; anything else is treated as some
/// flavor of XHTML. The check is case-sensitive and purely textual, so a
/// differently-cased or whitespace-varied HTML5 doctype is classified as
/// XHTML.
pub fn sniff_flavor(document: &str) -> MarkupFlavor {
    match (document.find("<!DOCTYPE html>"), document.find("<html")) {
        (Some(doctype), Some(html)) if doctype < html => MarkupFlavor::Html5,
        _ => MarkupFlavor::Xhtml,
    }
}

/// Create the validator matching the document's sniffed flavor
pub fn validator_for(document: &str) -> Box<dyn DocumentValidator> {
    match sniff_flavor(document) {
        MarkupFlavor::Html5 => Box::new(Html5Validator::new()),
        MarkupFlavor::Xhtml => Box::new(XhtmlValidator::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html5_doctype_before_html_tag() {
        let document = "<!DOCTYPE html>\n<html>\n<body></body>\n</html>";
        assert_eq!(sniff_flavor(document), MarkupFlavor::Html5);
    }

    #[test]
    fn test_xhtml_doctype() {
        let document = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
            \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n<html></html>";
        assert_eq!(sniff_flavor(document), MarkupFlavor::Xhtml);
    }

    #[test]
    fn test_no_doctype_is_xhtml() {
        assert_eq!(sniff_flavor("<html><body></body></html>"), MarkupFlavor::Xhtml);
    }

    #[test]
    fn test_lowercase_doctype_is_misclassified_as_xhtml() {
        // The sniff is case-sensitive by contract
        assert_eq!(
            sniff_flavor("<!doctype html>\n<html></html>"),
            MarkupFlavor::Xhtml
        );
    }

    #[test]
    fn test_doctype_after_html_tag_is_xhtml() {
        assert_eq!(
            sniff_flavor("<html><!DOCTYPE html></html>"),
            MarkupFlavor::Xhtml
        );
    }

    #[test]
    fn test_doctype_without_html_tag_is_xhtml() {
        assert_eq!(sniff_flavor("<!DOCTYPE html>"), MarkupFlavor::Xhtml);
    }
}
