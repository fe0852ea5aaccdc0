//! Assertions for server-rendered markup
//!
//! Helper functions for testing pages rendered by an in-process axum
//! application: XPath presence/count assertions, HTML5/XHTML markup
//! validation, isolated component rendering fixtures, and byte-for-byte
//! download comparison. The helpers automatically work with both XHTML and
//! HTML5 documents; where the two differ there are separate fixtures.
//!
//! ```no_run
//! use axum::Router;
//! use pagecheck::{assert_xpath, start_component_with_html, Label, PageTester};
//!
//! # async fn example() -> Result<(), pagecheck::TestkitError> {
//! let mut tester = PageTester::new(Router::new());
//! start_component_with_html(
//!     &mut tester,
//!     None,
//!     Label::new("label", "Hello, world!").unwrap(),
//!     "<span data-component-id=\"label\">replaced at render</span>",
//! )
//! .await?;
//! assert_xpath(&tester, "//span[@data-component-id='label']")?;
//! # Ok(())
//! # }
//! ```

mod assert;
mod error;
mod fixtures;

pub use assert::{
    assert_download_equals, assert_valid_markup, assert_valid_markup_with_context, assert_xpath,
    assert_xpath_count, markup_as_dom,
};
pub use error::{TestkitError, TestkitResult};
pub use fixtures::{start_component_with_html, start_component_with_xhtml};

// The harness and markup layers are part of the public surface
pub use pagecheck_harness::{
    Component, ComponentId, ComponentIdError, HarnessError, Label, MockRequest, MockSession, Page,
    PageParameters, PageTester, RenderContext,
};
pub use pagecheck_markup::{
    parse_markup, sniff_flavor, validate, validator_for, HtmlDocument, MarkupError, MarkupFlavor,
    XpathHelper,
};
