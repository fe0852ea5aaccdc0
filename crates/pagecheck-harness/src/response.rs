//! Captured response state

use crate::error::{HarnessError, HarnessResult};
use axum::http::{header, StatusCode};
use axum::response::Response;
use bytes::Bytes;

/// The last response captured by the tester: status, content type, and the
/// full body bytes.
#[derive(Debug, Clone)]
pub struct LastResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Bytes,
}

impl LastResponse {
    /// Drain an axum response into a captured form
    pub(crate) async fn capture(response: Response) -> HarnessResult<Self> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| HarnessError::Body {
                message: e.to_string(),
            })?;
        Ok(Self {
            status,
            content_type,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Full content-type header value, e.g. `text/html; charset=utf-8`
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Body as raw bytes
    pub fn binary(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8 text
    pub fn text(&self) -> HarnessResult<String> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_capture_text_response() {
        let response = (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            "<html></html>",
        )
            .into_response();
        let captured = LastResponse::capture(response).await.unwrap();

        assert_eq!(captured.status(), StatusCode::OK);
        assert_eq!(captured.content_type(), Some("text/html; charset=utf-8"));
        assert_eq!(captured.text().unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn test_capture_binary_response() {
        let bytes: &[u8] = &[0x89, 0x50, 0x4e, 0x47];
        let response = (
            [(header::CONTENT_TYPE, "image/png")],
            bytes.to_vec(),
        )
            .into_response();
        let captured = LastResponse::capture(response).await.unwrap();

        assert_eq!(captured.binary(), bytes);
        assert!(matches!(
            captured.text(),
            Err(HarnessError::NonUtf8Body(_))
        ));
    }
}
