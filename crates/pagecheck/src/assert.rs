//! Markup assertions against the tester's last response

use crate::error::TestkitResult;
use pagecheck_harness::{MockRequest, MockSession, PageTester};
use pagecheck_markup::validate::DocumentValidator;
use pagecheck_markup::{parse_markup, validator_for, HtmlDocument, XpathHelper};

/// Parse the most recently rendered page into a queryable DOM.
///
/// The parser tolerates even sloppy HTML, so it is possible for an XPath
/// assertion to pass while [`assert_valid_markup`] fails on the same page.
pub fn markup_as_dom(tester: &PageTester) -> TestkitResult<HtmlDocument> {
    Ok(parse_markup(&document(tester)?)?)
}

/// Assert that an XPath expression matches at least once in the most
/// recently rendered page.
///
/// # Panics
///
/// Panics when the expression matches nothing; the message embeds the
/// expression and the full document.
pub fn assert_xpath(tester: &PageTester, expression: &str) -> TestkitResult<()> {
    if match_count(tester, expression)? == 0 {
        panic!(
            "XPath expression [{}] could not be found in document:\n{}",
            expression,
            document(tester)?
        );
    }
    Ok(())
}

/// Assert that exactly `count` matches of an XPath expression exist in the
/// most recently rendered page.
///
/// # Panics
///
/// Panics when the match count differs; the message embeds the expected and
/// actual counts, the expression, and the full document.
pub fn assert_xpath_count(count: usize, tester: &PageTester, expression: &str) -> TestkitResult<()> {
    // First make sure the expression exists at all
    if count > 0 {
        assert_xpath(tester, expression)?;
    }

    // Then do a more exact check
    let matches = match_count(tester, expression)?;
    if matches != count {
        let s = if count == 1 { "" } else { "s" };
        panic!(
            "Expected {} occurrence{} of XPath expression [{}], but found {} in document:\n{}",
            count,
            s,
            expression,
            matches,
            document(tester)?
        );
    }
    Ok(())
}

/// Assert that the last rendered page has a `text/html` content type and is
/// valid markup.
///
/// The document is routed to the HTML5 or XHTML validator by doctype
/// sniffing: an HTML5 document must start with `<!DOCTYPE html>` before its
/// `<html>` element, anything else is validated as XHTML.
///
/// # Panics
///
/// Panics when the content type is missing or not `text/html`, or when the
/// chosen validator collects any error.
pub fn assert_valid_markup(tester: &PageTester) -> TestkitResult<()> {
    validate_markup(tester, None)
}

/// [`assert_valid_markup`] with an explicit number of source context lines
/// shown around each validation error.
pub fn assert_valid_markup_with_context(
    tester: &PageTester,
    context_lines: usize,
) -> TestkitResult<()> {
    validate_markup(tester, Some(context_lines))
}

/// Download a resource through the tester and assert that its binary
/// contents equal `expected` exactly.
///
/// `resource_uri` is a path like `static/resource/logo.png`; a leading
/// slash is optional.
///
/// # Panics
///
/// Panics when the downloaded bytes differ in length or at any offset.
pub async fn assert_download_equals(
    tester: &mut PageTester,
    resource_uri: &str,
    expected: &[u8],
) -> TestkitResult<()> {
    let session = MockSession::new();
    let mut request = MockRequest::new(&session);
    request.set_url(resource_uri);
    tester.process_request(request).await?;

    let response = tester.last_response()?;
    let actual = response.binary();
    if actual.len() != expected.len() {
        panic!(
            "Download of [{}] has wrong length: expected {} bytes, got {}",
            resource_uri,
            expected.len(),
            actual.len()
        );
    }
    if let Some(offset) = (0..expected.len()).find(|&i| actual[i] != expected[i]) {
        panic!(
            "Download of [{}] differs at byte {}: expected 0x{:02x}, got 0x{:02x}",
            resource_uri, offset, expected[offset], actual[offset]
        );
    }
    Ok(())
}

/// The most recently rendered page as a string
fn document(tester: &PageTester) -> TestkitResult<String> {
    Ok(tester.last_response_as_string()?)
}

/// Number of nodes matched by the expression against the current page.
///
/// The DOM is rebuilt from the last response on every call; nothing is
/// cached between assertions.
fn match_count(tester: &PageTester, expression: &str) -> TestkitResult<usize> {
    let dom = markup_as_dom(tester)?;
    Ok(XpathHelper::new(&dom).count(expression)?)
}

fn validate_markup(tester: &PageTester, context_lines: Option<usize>) -> TestkitResult<()> {
    let response = tester.last_response()?;
    let content_type = match response.content_type() {
        Some(value) => value,
        None => panic!("Content type of rendered page cannot be empty"),
    };
    assert!(
        content_type == "text/html" || content_type.starts_with("text/html;"),
        "Content type of rendered page must be text/html, got [{}]",
        content_type
    );

    let document = document(tester)?;
    let mut validator = validator_for(&document);
    if let Some(lines) = context_lines {
        validator.set_context_lines(lines);
    }

    validator.parse(&document);

    if !validator.is_valid() {
        panic!("Invalid HTML:\n{}", validator.errors().join("\n"));
    }
    Ok(())
}
