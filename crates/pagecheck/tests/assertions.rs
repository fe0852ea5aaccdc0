//! End-to-end assertion tests against a small demo application

use axum::http::header;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use pagecheck::{
    assert_download_equals, assert_valid_markup, assert_valid_markup_with_context, assert_xpath,
    assert_xpath_count, markup_as_dom, MockRequest, MockSession, PageTester, TestkitError,
};

const HTML5_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>demo</title>\n</head>\n\
<body>\n<span class=\"greet\">hello</span>\n<span class=\"greet\">howdy</span>\n\
<p id=\"solo\">only</p>\n</body>\n</html>";

const XHTML_PAGE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n\
<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"en\" lang=\"en\">\n\
<head>\n  <title>demo</title>\n</head>\n<body>\n<p>fine</p>\n</body>\n</html>";

// Stray </div> end tag: parseable by the tolerant DOM builder, rejected by
// the HTML5 validator
const BROKEN_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>demo</title>\n</head>\n\
<body>\n</div>\n</body>\n</html>";

const LOGO: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn demo_app() -> Router {
    Router::new()
        .route("/page", get(|| async { Html(HTML5_PAGE) }))
        .route("/xhtml", get(|| async { Html(XHTML_PAGE) }))
        .route("/broken", get(|| async { Html(BROKEN_PAGE) }))
        .route("/plain", get(|| async { "just text" }))
        .route(
            "/static/logo.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], LOGO.to_vec()) }),
        )
}

async fn tester_at(url: &str) -> PageTester {
    let mut tester = PageTester::new(demo_app());
    let session = MockSession::new();
    let mut request = MockRequest::new(&session);
    request.set_url(url);
    tester.process_request(request).await.unwrap();
    tester
}

#[tokio::test]
async fn xpath_presence_succeeds_when_expression_matches() {
    let tester = tester_at("/page").await;
    assert_xpath(&tester, "//span[@class='greet']").unwrap();
    assert_xpath(&tester, "//p[@id='solo']").unwrap();
}

#[tokio::test]
#[should_panic(expected = "could not be found in document")]
async fn xpath_presence_fails_when_expression_matches_nothing() {
    let tester = tester_at("/page").await;
    assert_xpath(&tester, "//table").unwrap();
}

#[tokio::test]
async fn xpath_count_succeeds_on_exact_match() {
    let tester = tester_at("/page").await;
    assert_xpath_count(2, &tester, "//span[@class='greet']").unwrap();
    assert_xpath_count(1, &tester, "//p").unwrap();
    assert_xpath_count(0, &tester, "//table").unwrap();
}

#[tokio::test]
#[should_panic(expected = "Expected 3 occurrences of XPath expression")]
async fn xpath_count_fails_on_mismatch() {
    let tester = tester_at("/page").await;
    assert_xpath_count(3, &tester, "//span[@class='greet']").unwrap();
}

#[tokio::test]
#[should_panic(expected = "Expected 1 occurrence of XPath expression")]
async fn xpath_count_message_is_singular_for_one() {
    let tester = tester_at("/page").await;
    assert_xpath_count(1, &tester, "//span[@class='greet']").unwrap();
}

#[tokio::test]
async fn invalid_xpath_is_an_error_not_a_panic() {
    let tester = tester_at("/page").await;
    let err = assert_xpath(&tester, "!!!").unwrap_err();
    assert!(matches!(err, TestkitError::Markup(_)));
}

#[tokio::test]
async fn assertions_without_a_response_are_errors() {
    let tester = PageTester::new(demo_app());
    let err = assert_xpath(&tester, "//p").unwrap_err();
    assert!(matches!(err, TestkitError::Harness(_)));
}

#[tokio::test]
async fn markup_as_dom_parses_the_last_response() {
    let tester = tester_at("/page").await;
    let dom = markup_as_dom(&tester).unwrap();
    assert!(dom.to_string().contains("greet"));
}

#[tokio::test]
async fn valid_html5_markup_passes() {
    let tester = tester_at("/page").await;
    assert_valid_markup(&tester).unwrap();
}

#[tokio::test]
async fn valid_xhtml_markup_passes() {
    let tester = tester_at("/xhtml").await;
    assert_valid_markup(&tester).unwrap();
}

#[tokio::test]
#[should_panic(expected = "Invalid HTML:")]
async fn broken_markup_fails_validation() {
    let tester = tester_at("/broken").await;
    assert_valid_markup(&tester).unwrap();
}

#[tokio::test]
#[should_panic(expected = "Invalid HTML:")]
async fn context_override_still_reports_errors() {
    let tester = tester_at("/broken").await;
    assert_valid_markup_with_context(&tester, 2).unwrap();
}

#[tokio::test]
#[should_panic(expected = "must be text/html")]
async fn non_html_content_type_fails_before_parsing() {
    let tester = tester_at("/plain").await;
    assert_valid_markup(&tester).unwrap();
}

#[tokio::test]
async fn download_comparison_succeeds_on_identical_bytes() {
    let mut tester = PageTester::new(demo_app());
    // Resource URIs are commonly written without a leading slash
    assert_download_equals(&mut tester, "static/logo.png", LOGO)
        .await
        .unwrap();
}

#[tokio::test]
#[should_panic(expected = "differs at byte 3")]
async fn download_comparison_fails_on_a_single_differing_byte() {
    let mut tester = PageTester::new(demo_app());
    let mut expected = LOGO.to_vec();
    expected[3] ^= 0xff;
    assert_download_equals(&mut tester, "static/logo.png", &expected)
        .await
        .unwrap();
}

#[tokio::test]
#[should_panic(expected = "wrong length")]
async fn download_comparison_fails_on_length_mismatch() {
    let mut tester = PageTester::new(demo_app());
    assert_download_equals(&mut tester, "static/logo.png", &LOGO[..4])
        .await
        .unwrap();
}
