//! Markup parsing and inspection for rendered pages
//!
//! This crate provides the document-side half of the pagecheck testkit:
//! tolerant HTML parsing into a queryable DOM, an XPath helper, doctype
//! sniffing, and HTML5/XHTML markup validators.

mod dom;
mod error;
mod flavor;
mod xpath;

pub mod validate;

pub use dom::parse_markup;
pub use error::{MarkupError, MarkupResult};
pub use flavor::{sniff_flavor, validator_for, MarkupFlavor};
pub use xpath::XpathHelper;

// The parsed document type callers get back from `parse_markup`.
pub use skyscraper::html::HtmlDocument;
