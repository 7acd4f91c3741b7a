use super::*;

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use wordpress_mcp_client::{ApiError, ApiResponse, Method, RequestBody, RequestOptions};

/// One request seen by [`MockWpApi`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub upload_name: Option<String>,
}

impl RecordedCall {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Scripted `WpApi` keyed by `"METHOD endpoint"`.
///
/// Responses queued for a key are consumed in order; the last one is reused.
/// Unscripted requests answer `404 Not Found`.
#[derive(Default)]
pub struct MockWpApi {
    responses: Mutex<HashMap<String, VecDeque<Result<ApiResponse, ApiError>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockWpApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn respond(&self, method: Method, endpoint: &str, body: Value) {
        self.push(
            method,
            endpoint,
            Ok(ApiResponse {
                status: 200,
                body: Some(body),
                total: None,
                total_pages: None,
            }),
        )
        .await;
    }

    pub async fn respond_page(&self, endpoint: &str, body: Value, total: u64, total_pages: u64) {
        self.push(
            Method::GET,
            endpoint,
            Ok(ApiResponse {
                status: 200,
                body: Some(body),
                total: Some(total),
                total_pages: Some(total_pages),
            }),
        )
        .await;
    }

    pub async fn fail(&self, method: Method, endpoint: &str, status: u16, status_text: &str) {
        let error = ApiError::Http {
            status,
            status_text: status_text.to_string(),
            path: endpoint.to_string(),
            body: String::new(),
        };
        self.push(method, endpoint, Err(error)).await;
    }

    pub async fn push(
        &self,
        method: Method,
        endpoint: &str,
        response: Result<ApiResponse, ApiError>,
    ) {
        self.responses
            .lock()
            .await
            .entry(format!("{method} {endpoint}"))
            .or_default()
            .push_back(response);
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl WpApi for MockWpApi {
    async fn send(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> wordpress_mcp_client::Result<ApiResponse> {
        let (body, upload_name) = match &options.body {
            Some(RequestBody::Json(value)) => (Some(value.clone()), None),
            Some(RequestBody::Upload(upload)) => (None, Some(upload.file_name.clone())),
            None => (None, None),
        };
        self.calls.lock().await.push(RecordedCall {
            method: options.method.clone(),
            endpoint: endpoint.to_string(),
            query: options
                .query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
            upload_name,
        });

        let key = format!("{} {endpoint}", options.method);
        let mut responses = self.responses.lock().await;
        match responses.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Err(ApiError::Http {
                status: 404,
                status_text: "Not Found".to_string(),
                path: endpoint.to_string(),
                body: String::new(),
            }),
        }
    }
}

/// Server backed by a fresh mock.
pub fn server_with(api: &Arc<MockWpApi>) -> WordPressMcp {
    let api: Arc<dyn WpApi> = Arc::clone(api) as Arc<dyn WpApi>;
    WordPressMcp::new(api)
}

/// All text blocks of a tool result joined by newlines.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}
