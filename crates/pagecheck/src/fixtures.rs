//! Isolated component rendering fixtures
//!
//! Each fixture wraps a markup snippet in a minimal page skeleton, attaches
//! the given component, and renders the page through the tester's normal
//! request/response cycle. No assertion is performed here; inspect the
//! result afterwards with the XPath or validity assertions.

use crate::error::TestkitResult;
use pagecheck_harness::{Component, Page, PageParameters, PageTester};

/// Render a component using a snippet of HTML5 markup.
///
/// The snippet is placed in a simple HTML5 page:
///
/// ```text
/// <!DOCTYPE html>
/// <html>
/// <head>
///   <title>untitled</title>
/// </head>
/// <body>
/// <span data-component-id="label">Hello, world!</span>
/// </body>
/// </html>
/// ```
///
/// Page parameters, when given, become the query string of the request that
/// renders the page.
pub async fn start_component_with_html(
    tester: &mut PageTester,
    parameters: Option<PageParameters>,
    component: impl Component + 'static,
    markup: &str,
) -> TestkitResult<()> {
    let page_markup = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <title>untitled</title>\n</head>\n\
         <body>\n{}\n</body>\n</html>",
        markup
    );
    start(tester, parameters, component, page_markup).await
}

/// Render a component using a snippet of XHTML 1.0 Strict markup.
///
/// Identical to [`start_component_with_html`] apart from the page skeleton,
/// which carries the XHTML 1.0 Strict doctype and `xmlns`/language
/// attributes on the `<html>` element.
pub async fn start_component_with_xhtml(
    tester: &mut PageTester,
    parameters: Option<PageParameters>,
    component: impl Component + 'static,
    markup: &str,
) -> TestkitResult<()> {
    let page_markup = format!(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n\
         <html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"en\" lang=\"en\">\n\
         <head>\n  <title>untitled</title>\n</head>\n<body>\n{}\n</body>\n</html>",
        markup
    );
    start(tester, parameters, component, page_markup).await
}

async fn start(
    tester: &mut PageTester,
    parameters: Option<PageParameters>,
    component: impl Component + 'static,
    page_markup: String,
) -> TestkitResult<()> {
    let mut page = Page::with_markup(page_markup).add(component);
    if let Some(parameters) = parameters {
        page = page.with_parameters(parameters);
    }
    tester.start_page(page).await?;
    Ok(())
}
