//! Request options and the response shapes this crate reads.
//!
//! Response structs only declare the fields that are actually displayed; any
//! extra field returned by the remote side is ignored.

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::params::QueryParams;

// ============ Requests ============

/// Binary payload sent as `multipart/form-data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name reported to the server.
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Extra text fields sent next to the file part.
    pub fields: Vec<(String, String)>,
}

/// Request body variants.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON; `Content-Type: application/json` unless the caller set one.
    Json(Value),
    /// Sent as a multipart form with the file under the `file` part.
    ///
    /// A `Content-Type` set by the caller replaces the generated multipart one.
    Upload(FileUpload),
}

/// Everything needed to issue one call besides the endpoint path.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    /// Attach Basic authentication.
    pub needs_auth: bool,
    pub query: QueryParams,
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            needs_auth: true,
            query: QueryParams::default(),
            headers: HeaderMap::new(),
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// `method` with a JSON body.
    pub fn json(method: Method, body: Value) -> Self {
        Self {
            method,
            body: Some(RequestBody::Json(body)),
            ..Self::default()
        }
    }

    pub fn post(body: Value) -> Self {
        Self::json(Method::POST, body)
    }

    pub fn upload(upload: FileUpload) -> Self {
        Self {
            method: Method::POST,
            body: Some(RequestBody::Upload(upload)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.needs_auth = false;
        self
    }
}

// ============ Responses ============

/// Decoded response of one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// `None` for `204 No Content`.
    pub body: Option<Value>,
    /// `X-WP-Total` header.
    pub total: Option<u64>,
    /// `X-WP-TotalPages` header.
    pub total_pages: Option<u64>,
}

/// Decode a response body into `T`.
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: Option<Value>) -> Result<T> {
    let body = body.ok_or_else(|| ApiError::EmptyResponse {
        endpoint: endpoint.to_string(),
    })?;
    serde_json::from_value(body).map_err(|e| ApiError::Parse {
        endpoint: endpoint.to_string(),
        detail: e.to_string(),
    })
}

/// A `{ raw, rendered }` pair, or a bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RenderedRepr")]
pub struct Rendered {
    pub rendered: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RenderedRepr {
    Plain(String),
    Object {
        #[serde(default)]
        rendered: Option<String>,
        #[serde(default)]
        raw: Option<String>,
    },
}

impl From<RenderedRepr> for Rendered {
    fn from(repr: RenderedRepr) -> Self {
        let rendered = match repr {
            RenderedRepr::Plain(s) => s,
            RenderedRepr::Object { rendered, raw } => rendered.or(raw).unwrap_or_default(),
        };
        Self { rendered }
    }
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// A post, page or custom post type item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub author: Option<u64>,
}

/// Entry of `/wp/v2/types`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentTypeInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub rest_base: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hierarchical: bool,
    /// Feature map (`{"title": true, ...}`); only present in some contexts.
    #[serde(default)]
    pub supports: Option<Value>,
}

/// Entry of `/wp/v2/taxonomies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaxonomyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub rest_base: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hierarchical: bool,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A category, tag or custom taxonomy term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Term {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub taxonomy: String,
    #[serde(default)]
    pub link: String,
}

/// An attachment from the media library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub caption: Rendered,
    #[serde(default)]
    pub description: Rendered,
    #[serde(default)]
    pub post: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Only returned in the `edit` context.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub registered_date: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Plugin {
    /// Plugin file identifier, e.g. `akismet/akismet`.
    pub plugin: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: Rendered,
    #[serde(default)]
    pub plugin_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Theme {
    pub stylesheet: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub name: Rendered,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: Rendered,
    #[serde(default)]
    pub description: Rendered,
}

/// `/wp/v2/settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub start_of_week: Option<u8>,
    pub language: Option<String>,
    pub posts_per_page: Option<u32>,
    pub show_on_front: Option<String>,
    pub page_on_front: Option<u64>,
    pub page_for_posts: Option<u64>,
    pub default_category: Option<u64>,
    pub default_post_format: Option<String>,
    pub default_comment_status: Option<String>,
    pub default_ping_status: Option<String>,
}

/// Body returned by a forced delete.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Deleted {
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub previous: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rendered_accepts_object_or_string() {
        let r: Rendered = serde_json::from_value(json!({ "rendered": "Hello", "protected": false }))
            .unwrap();
        assert_eq!(r.rendered, "Hello");

        let r: Rendered = serde_json::from_value(json!({ "raw": "Raw only" })).unwrap();
        assert_eq!(r.rendered, "Raw only");

        let r: Rendered = serde_json::from_value(json!("Plain")).unwrap();
        assert_eq!(r.to_string(), "Plain");
    }

    #[test]
    fn content_item_ignores_unknown_fields() {
        let item: ContentItem = serde_json::from_value(json!({
            "id": 7,
            "title": { "rendered": "Post" },
            "status": "draft",
            "type": "post",
            "_links": { "self": [] },
            "meta": []
        }))
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.kind, "post");
        assert_eq!(item.title.rendered, "Post");
    }

    #[test]
    fn decode_reports_missing_body_and_shape_errors() {
        let err = decode::<Term>("/wp/v2/tags/1", None).unwrap_err();
        assert_eq!(
            err,
            ApiError::EmptyResponse {
                endpoint: "/wp/v2/tags/1".to_string()
            }
        );

        let err = decode::<Term>("/wp/v2/tags/1", Some(json!({ "name": "x" }))).unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }));
    }
}
