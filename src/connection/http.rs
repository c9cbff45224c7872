//! HTTP connection for eCloud REST API calls

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use url::Url;

use super::{ApiRequest, ApiResponse, Connection};
use crate::error::{EcloudError, Result};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("ecloud-rs/", env!("CARGO_PKG_VERSION"));

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let total = body.len();
    let truncated: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();

    let truncated = if truncated.len() < total {
        format!("{}... [truncated, {} bytes total]", truncated, total)
    } else {
        truncated
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// reqwest-backed [`Connection`] authenticating with an API key
#[derive(Clone)]
pub struct HttpConnection {
    client: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for HttpConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConnection")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpConnection {
    /// Create a connection with the default timeout
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        if api_key.is_empty() {
            return Err(EcloudError::Validation("api key must not be empty"));
        }

        // Fail early on a malformed base URL rather than on the first request
        Url::parse(base_url)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }
}

impl Connection for HttpConnection {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request)?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(AUTHORIZATION, &self.api_key);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() && status != StatusCode::NOT_FOUND {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!(
                "API error: {} {} - {} - {}",
                request.method,
                request.path,
                status,
                sanitize_for_log(&body)
            );
        }

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(sanitized.contains("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("bad\nrequest\t!"), "badrequest!");
    }

    #[test]
    fn test_sanitize_multibyte_boundary() {
        let body = "é".repeat(300);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated"));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = HttpConnection::new("https://api.ukfast.io", "").unwrap_err();
        assert!(matches!(err, EcloudError::Validation(_)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = HttpConnection::new("not a url", "key").unwrap_err();
        assert!(matches!(err, EcloudError::Url(_)));
    }

    #[test]
    fn test_url_includes_query() {
        let conn = HttpConnection::new("https://api.ukfast.io/", "key").unwrap();
        let request = ApiRequest::new(Method::GET, "/ecloud/v2/vpcs")
            .with_query(vec![("name:eq".to_string(), "web".to_string())]);
        let url = conn.url_for(&request).unwrap();
        assert_eq!(url.path(), "/ecloud/v2/vpcs");
        assert_eq!(
            url.query_pairs().collect::<Vec<_>>(),
            vec![("name:eq".into(), "web".into())]
        );
    }
}
