use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{ApiResponse, RequestOptions};

/// Seam between tool handlers and the remote API.
///
/// Handlers depend on `Arc<dyn WpApi>`, so tests can substitute a recording
/// implementation.
#[async_trait]
pub trait WpApi: Send + Sync {
    /// Issue one call and return the classified response.
    ///
    /// `endpoint` is relative to the REST root, e.g. `/wp/v2/posts/12`.
    async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse>;

    /// Issue one call and return only the decoded body (`None` for 204).
    async fn call(&self, endpoint: &str, options: RequestOptions) -> Result<Option<Value>> {
        Ok(self.send(endpoint, options).await?.body)
    }
}
