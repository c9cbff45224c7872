//! Connection layer
//!
//! The transport the resource clients talk through. Anything implementing
//! [`Connection`] can be injected; [`HttpConnection`] is the reqwest-backed
//! implementation used against the real API.
//!
//! # Module Structure
//!
//! - [`http`] - reqwest implementation with API key auth
//! - [`params`] - pagination, filtering and sorting parameters
//! - [`response`] - wire envelopes and status handling
//!
//! # Example
//!
//! ```ignore
//! use ecloud::connection::{ApiRequestParameters, Connection, HttpConnection};
//!
//! async fn example() -> ecloud::Result<()> {
//!     let conn = HttpConnection::new("https://api.ukfast.io", "my-api-key")?;
//!     let response = conn.get("/ecloud/v2/vpcs", &ApiRequestParameters::default()).await?;
//!     println!("{}", response.status);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use reqwest::Method;
use serde_json::Value;

use crate::error::Result;

pub mod http;
pub mod params;
pub mod response;

pub use http::HttpConnection;
pub use params::{ApiRequestParameters, Filter, FilterOperator, Sorting};
pub use response::{ApiResponse, Decode, Envelope, PaginationMeta, TaskId, TaskReference};

/// A single request, relative to the connection's base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }
}

/// HTTP transport. Implementations report every status code back in the
/// [`ApiResponse`]; only failures to get a response at all are errors.
pub trait Connection: Send + Sync {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;

    fn get(
        &self,
        path: &str,
        parameters: &ApiRequestParameters,
    ) -> impl Future<Output = Result<ApiResponse>> + Send {
        self.send(ApiRequest::new(Method::GET, path).with_query(parameters.to_query()))
    }

    fn post(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<ApiResponse>> + Send {
        self.send(ApiRequest::new(Method::POST, path).with_body(body))
    }

    fn patch(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<ApiResponse>> + Send {
        self.send(ApiRequest::new(Method::PATCH, path).with_body(body))
    }

    fn put(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<ApiResponse>> + Send {
        self.send(ApiRequest::new(Method::PUT, path).with_body(body))
    }

    fn delete(&self, path: &str) -> impl Future<Output = Result<ApiResponse>> + Send {
        self.send(ApiRequest::new(Method::DELETE, path))
    }
}
