//! The mock request/response tester

use crate::error::{HarnessError, HarnessResult};
use crate::page::Page;
use crate::request::MockRequest;
use crate::response::LastResponse;
use axum::body::Body;
use axum::http::Request;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;
use tracing::debug;

/// Path a started page is mounted at for its request cycle
pub const PAGE_MOUNT_PATH: &str = "/pagecheck/page";

/// Drives an application router in-process and captures the last response.
///
/// No socket is bound; every request goes through the router with a
/// `oneshot` call. The tester is stateless apart from the captured last
/// response, which each new request replaces.
pub struct PageTester {
    app: Router,
    last_response: Option<LastResponse>,
}

impl PageTester {
    /// Create a tester around the application under test
    pub fn new(app: Router) -> Self {
        Self {
            app,
            last_response: None,
        }
    }

    /// The application router the tester was built with
    pub fn app(&self) -> &Router {
        &self.app
    }

    /// Render a page and serve it through the normal request cycle.
    ///
    /// The page's markup is rendered (component substitution happens here),
    /// mounted at [`PAGE_MOUNT_PATH`] on a clone of the application router,
    /// and requested with the page parameters as the query string. The
    /// response is captured as the last response.
    pub async fn start_page(&mut self, page: Page) -> HarnessResult<()> {
        let rendered = page.render()?;
        debug!(bytes = rendered.len(), "mounting rendered page");

        let app = self
            .app
            .clone()
            .route(PAGE_MOUNT_PATH, get(move || async move { Html(rendered) }));

        let mut url = PAGE_MOUNT_PATH.to_string();
        let query = page.parameters().query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        let request = Request::builder()
            .uri(&url)
            .body(Body::empty())
            .map_err(|e| HarnessError::InvalidRequest {
                url,
                message: e.to_string(),
            })?;
        self.dispatch(app, request).await
    }

    /// Process a mock request against the application router and capture
    /// the response
    pub async fn process_request(&mut self, request: MockRequest) -> HarnessResult<()> {
        let request = request.into_http()?;
        self.dispatch(self.app.clone(), request).await
    }

    /// The last captured response
    pub fn last_response(&self) -> HarnessResult<&LastResponse> {
        self.last_response.as_ref().ok_or(HarnessError::NoResponse)
    }

    /// The last captured response body as text
    pub fn last_response_as_string(&self) -> HarnessResult<String> {
        self.last_response()?.text()
    }

    async fn dispatch(&mut self, app: Router, request: Request<Body>) -> HarnessResult<()> {
        debug!(uri = %request.uri(), method = %request.method(), "dispatching request");
        let response = app
            .oneshot(request)
            .await
            .map_err(|e| HarnessError::Dispatch {
                message: e.to_string(),
            })?;
        self.last_response = Some(LastResponse::capture(response).await?);
        Ok(())
    }
}
