//! Response handling
//!
//! Wire envelopes and the helpers that turn a raw [`ApiResponse`] into typed
//! values. Status classification happens here: a handler gets the first look
//! at the status code (this is where 404 becomes a NotFound), then any other
//! non-2xx status becomes [`EcloudError::Api`].

use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{EcloudError, Result};

/// Raw response returned by a [`Connection`](super::Connection)
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Classify the status code. `handler` may turn a status into a custom
    /// error; otherwise non-2xx statuses become [`EcloudError::Api`].
    pub fn handle<F>(self, handler: F) -> Result<Self>
    where
        F: FnOnce(StatusCode) -> Option<EcloudError>,
    {
        if let Some(err) = handler(self.status) {
            return Err(err);
        }

        if !self.status.is_success() {
            return Err(EcloudError::Api {
                status: self.status,
                body: self.body,
            });
        }

        Ok(self)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the `data` member of the standard envelope
    pub fn data<T: DeserializeOwned>(&self) -> Result<T> {
        let envelope: Envelope<T> = self.json()?;
        Ok(envelope.data)
    }
}

/// `{"data": ..., "meta": {"pagination": {...}}}`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: PaginationMeta,
}

/// Pagination block of a list response. Missing fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationMeta {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Returned by v2 create and patch calls: the resource and the task
/// tracking the change
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskReference {
    #[serde(rename = "id")]
    pub resource_id: String,
    pub task_id: String,
}

/// Identifier of an asynchronous task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TaskId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TaskId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Output of a mutating call, decoded from a successful response
pub trait Decode: Sized {
    fn decode(response: &ApiResponse) -> Result<Self>;
}

/// Body ignored (v1 patch/delete, lock/unlock)
impl Decode for () {
    fn decode(_response: &ApiResponse) -> Result<Self> {
        Ok(())
    }
}

impl Decode for TaskReference {
    fn decode(response: &ApiResponse) -> Result<Self> {
        response.data()
    }
}

impl Decode for TaskId {
    fn decode(response: &ApiResponse) -> Result<Self> {
        #[derive(Deserialize)]
        struct TaskIdData {
            task_id: TaskId,
        }

        Ok(response.data::<TaskIdData>()?.task_id)
    }
}

/// `{"data": {"id": 123}}` (v1 create)
impl Decode for i64 {
    fn decode(response: &ApiResponse) -> Result<Self> {
        #[derive(Deserialize)]
        struct IdData {
            id: i64,
        }

        Ok(response.data::<IdData>()?.id)
    }
}

/// `{"data": {"id": "..."}}` (synchronous v2 create)
impl Decode for String {
    fn decode(response: &ApiResponse) -> Result<Self> {
        #[derive(Deserialize)]
        struct IdData {
            id: String,
        }

        Ok(response.data::<IdData>()?.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_runs_before_status_check() {
        let response = ApiResponse::new(StatusCode::NOT_FOUND, "");
        let err = response
            .handle(|status| {
                (status == StatusCode::NOT_FOUND).then(|| EcloudError::not_found("vpc", "vpc-1"))
            })
            .unwrap_err();
        assert!(err.is_not_found_for("vpc"));
    }

    #[test]
    fn test_unhandled_status_becomes_api_error() {
        let response = ApiResponse::new(StatusCode::BAD_GATEWAY, "upstream down");
        let err = response.handle(|_| None).unwrap_err();
        match err {
            EcloudError::Api { status, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_task_id() {
        let response =
            ApiResponse::new(StatusCode::ACCEPTED, r#"{"data":{"task_id":"task-abcdef12"}}"#);
        let task_id = TaskId::decode(&response).unwrap();
        assert_eq!(task_id, "task-abcdef12");
    }

    #[test]
    fn test_decode_task_reference() {
        let response = ApiResponse::new(
            StatusCode::CREATED,
            r#"{"data":{"id":"vpc-abcdef12","task_id":"task-abcdef12"}}"#,
        );
        let reference = TaskReference::decode(&response).unwrap();
        assert_eq!(reference.resource_id, "vpc-abcdef12");
        assert_eq!(reference.task_id, "task-abcdef12");
    }

    #[test]
    fn test_decode_v1_id() {
        let response = ApiResponse::new(StatusCode::CREATED, r#"{"data":{"id":123}}"#);
        assert_eq!(i64::decode(&response).unwrap(), 123);
    }

    #[test]
    fn test_unit_ignores_empty_body() {
        let response = ApiResponse::new(StatusCode::NO_CONTENT, "");
        assert!(<()>::decode(&response).is_ok());
    }

    #[test]
    fn test_missing_meta_defaults_to_zero_pages() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(envelope.meta.pagination.total_pages, 0);
    }
}
