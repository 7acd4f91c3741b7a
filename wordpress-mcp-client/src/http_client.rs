//! HTTP adapter for the WordPress REST API.
//!
//! Builds the URL from the configured root, attaches Basic authentication,
//! serializes the body, and classifies the response:
//! - `204 No Content` → `body: None`
//! - other 2xx → decoded JSON
//! - anything else → [`ApiError::Http`] with the best-effort body text
//!
//! Calls are never retried.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::config::WpConfig;
use crate::error::{ApiError, Result};
use crate::traits::WpApi;
use crate::types::{ApiResponse, FileUpload, RequestBody, RequestOptions};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Maximum number of bytes of a response body written to the log.
const LOG_BODY_LIMIT: usize = 256;

/// Client bound to one WordPress site.
#[derive(Debug, Clone)]
pub struct WpClient {
    client: Client,
    config: WpConfig,
}

impl WpClient {
    pub fn new(config: WpConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network {
                detail: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WpConfig {
        &self.config
    }

    /// Full URL for an endpoint such as `/wp/v2/posts`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.config.api_base())
        } else {
            format!("{}/{endpoint}", self.config.api_base())
        }
    }

    async fn execute(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse> {
        let url = self.endpoint_url(endpoint);
        let RequestOptions {
            method,
            body,
            needs_auth,
            query,
            headers,
        } = options;

        log::debug!("[wordpress] {method} {url}");

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        if needs_auth {
            let credentials = &self.config.credentials;
            request = request.basic_auth(
                &credentials.username,
                Some(&credentials.application_password),
            );
        }

        match body {
            Some(RequestBody::Json(value)) => {
                let bytes = serde_json::to_vec(&value).map_err(|e| ApiError::Serialization {
                    detail: e.to_string(),
                })?;
                let headers = with_default_content_type(headers);
                request = request.headers(headers).body(bytes);
            }
            Some(RequestBody::Upload(upload)) => {
                // caller headers win over the generated multipart content type
                request = request.multipart(upload_form(upload)?).headers(headers);
            }
            None => {
                request = request.headers(headers);
            }
        }

        let response = request.send().await?;
        classify(response).await
    }
}

#[async_trait::async_trait]
impl WpApi for WpClient {
    async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.execute(endpoint, options).await
    }
}

/// Percent-encode one path segment (plugin identifiers contain `/`).
pub fn encode_path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn with_default_content_type(mut headers: HeaderMap) -> HeaderMap {
    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    headers
}

fn upload_form(upload: FileUpload) -> Result<Form> {
    let FileUpload {
        file_name,
        mime_type,
        bytes,
        fields,
    } = upload;
    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(&mime_type)
        .map_err(|e| ApiError::Serialization {
            detail: format!("invalid mime type '{mime_type}': {e}"),
        })?;
    Ok(fields
        .into_iter()
        .fold(Form::new().part("file", part), |form, (name, value)| {
            form.text(name, value)
        }))
}

async fn classify(response: Response) -> Result<ApiResponse> {
    let status = response.status();
    log::debug!("[wordpress] Response Status: {}", status.as_u16());

    if !status.is_success() {
        let path = response.url().path().to_string();
        // unreadable bodies stay empty
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            path,
            body,
        };
        if err.is_expected() {
            log::warn!("[wordpress] {}", truncate_for_log(&err.to_string()));
        } else {
            log::error!("[wordpress] {}", truncate_for_log(&err.to_string()));
        }
        return Err(err);
    }

    let total = header_number(response.headers(), "x-wp-total");
    let total_pages = header_number(response.headers(), "x-wp-totalpages");

    if status == StatusCode::NO_CONTENT {
        return Ok(ApiResponse {
            status: status.as_u16(),
            body: None,
            total,
            total_pages,
        });
    }

    let endpoint = response.url().path().to_string();
    let text = response.text().await?;
    log::debug!("[wordpress] Response Body: {}", truncate_for_log(&text));

    let body: Value = serde_json::from_str(&text).map_err(|e| {
        log::error!("[wordpress] JSON parse failed: {e}");
        ApiError::Parse {
            endpoint,
            detail: e.to_string(),
        }
    })?;

    Ok(ApiResponse {
        status: status.as_u16(),
        body: Some(body),
        total,
        total_pages,
    })
}

fn header_number(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Cut `s` to at most [`LOG_BODY_LIMIT`] bytes on a char boundary.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_root_and_path() {
        let config = WpConfig::new("https://example.com/", "u", "p").unwrap();
        let client = WpClient::new(config).unwrap();
        assert_eq!(
            client.endpoint_url("/wp/v2/posts"),
            "https://example.com/wp-json/wp/v2/posts"
        );
        assert_eq!(
            client.endpoint_url("wp/v2/posts"),
            "https://example.com/wp-json/wp/v2/posts"
        );
    }

    #[test]
    fn explicit_content_type_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let headers = with_default_content_type(headers);
        assert_eq!(headers[CONTENT_TYPE], "text/plain");

        let headers = with_default_content_type(HeaderMap::new());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn plugin_identifiers_are_one_segment() {
        assert_eq!(encode_path_segment("akismet/akismet"), "akismet%2Fakismet");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_for_log("short"), "short");

        let long = "é".repeat(LOG_BODY_LIMIT);
        let cut = truncate_for_log(&long);
        assert!(cut.contains("... [truncated, total"));
        assert!(cut.contains(&format!("{} bytes]", long.len())));
    }
}
