//! XPath evaluation over a parsed document

use crate::error::{MarkupError, MarkupResult};
use skyscraper::html::HtmlDocument;
use skyscraper::xpath::xpath_item_set::XpathItemSet;
use skyscraper::xpath::{self, XpathItemTree};

/// Evaluates XPath expressions against a parsed document.
///
/// Construction walks the DOM once to build the item tree; each query is
/// then evaluated against that tree.
pub struct XpathHelper {
    tree: XpathItemTree,
}

impl XpathHelper {
    /// Build a helper for the given document
    pub fn new(document: &HtmlDocument) -> Self {
        Self {
            tree: XpathItemTree::from(document),
        }
    }

    /// Return the items matched by the given expression
    pub fn find(&self, expression: &str) -> MarkupResult<XpathItemSet<'_>> {
        let xpath = xpath::parse(expression).map_err(|e| MarkupError::Xpath {
            expression: expression.to_string(),
            message: e.to_string(),
        })?;
        xpath
            .apply(&self.tree)
            .map_err(|e| MarkupError::XpathEvaluation {
                expression: expression.to_string(),
                message: e.to_string(),
            })
    }

    /// Count the items matched by the given expression (0 when nothing matches)
    pub fn count(&self, expression: &str) -> MarkupResult<usize> {
        Ok(self.find(expression)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_markup;

    fn helper(markup: &str) -> XpathHelper {
        let document = parse_markup(markup).unwrap();
        XpathHelper::new(&document)
    }

    #[test]
    fn test_count_matches() {
        let helper = helper(
            "<html><body>\
             <span class=\"a\">one</span>\
             <span class=\"a\">two</span>\
             <span class=\"b\">three</span>\
             </body></html>",
        );
        assert_eq!(helper.count("//span").unwrap(), 3);
        assert_eq!(helper.count("//span[@class='a']").unwrap(), 2);
        assert_eq!(helper.count("//span[@class='b']").unwrap(), 1);
    }

    #[test]
    fn test_count_no_matches_is_zero() {
        let helper = helper("<html><body><p>text</p></body></html>");
        assert_eq!(helper.count("//table").unwrap(), 0);
    }

    #[test]
    fn test_invalid_expression_is_an_error() {
        let helper = helper("<html><body></body></html>");
        let err = helper.count("!!!").unwrap_err();
        assert!(matches!(err, MarkupError::Xpath { .. }));
    }
}
