//! In-memory [`ConfluenceApi`] for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use super::{ApiRequest, ApiResponse, ConfluenceApi, ConfluenceError};

/// Records every request and replays queued responses.
///
/// When the queue is empty it answers `200 {"ok": true}`.
#[derive(Default)]
pub struct RecordingApi {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, ConfluenceError>>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response.
    pub fn respond(&self, response: Result<ApiResponse, ConfluenceError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl ConfluenceApi for RecordingApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ConfluenceError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, Some(json!({"ok": true})))))
    }
}
