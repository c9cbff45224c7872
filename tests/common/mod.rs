//! Shared helpers for the wiremock-backed tests

#![allow(dead_code)]

use ecloud::{EcloudService, HttpConnection};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

/// Route crate logs to the test writer; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn setup() -> (MockServer, EcloudService<HttpConnection>) {
    init_tracing();
    let server = MockServer::start().await;
    let connection = HttpConnection::new(&server.uri(), API_KEY).expect("valid connection");
    (server, EcloudService::new(connection))
}

/// A list envelope for one page
pub fn page(data: Value, current_page: u32, total_pages: u32) -> Value {
    let count = data.as_array().map(|a| a.len()).unwrap_or(0);
    json!({
        "data": data,
        "meta": {
            "pagination": {
                "total": count,
                "count": count,
                "per_page": 15,
                "current_page": current_page,
                "total_pages": total_pages
            }
        }
    })
}
