//! Generic operation set shared by every REST collection.
//!
//! An [`EntityConfig`] names the collection and its conventions; a
//! [`Resource`] says how a decoded item is displayed. [`Crud`] combines both
//! with the adapter and yields envelopes for create, read, update, delete,
//! list and the bulk variants.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use wordpress_mcp_client::types::decode;
use wordpress_mcp_client::{
    ApiError, Method, QueryParams, RequestOptions, WpApi, encode_path_segment,
};

use super::bulk::{self, BulkResult};
use super::envelope::ResponseEnvelope;

/// Largest page size accepted by the REST API.
pub const MAX_PER_PAGE: u32 = 100;

/// How a decoded item is presented.
pub trait Resource: DeserializeOwned + Send {
    /// Identifier used in paths and confirmations.
    fn id(&self) -> String;

    /// One line in listings and create/update confirmations.
    fn summary(&self) -> String;

    /// Field-by-field view of a single item.
    fn details(&self) -> Vec<String>;
}

/// Static description of one REST collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityConfig {
    /// Name used in envelope text (`post`, `category`, `media item`).
    pub label: String,
    /// Collection endpoint relative to the REST root (`/wp/v2/posts`).
    pub endpoint: String,
    pub update_method: Method,
    /// Percent-encode identifiers as a single path segment.
    pub encode_ids: bool,
}

impl EntityConfig {
    pub fn new(label: impl Into<String>, endpoint: &str) -> Self {
        Self {
            label: label.into(),
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            update_method: Method::PUT,
            encode_ids: false,
        }
    }

    #[must_use]
    pub fn with_update_method(mut self, method: Method) -> Self {
        self.update_method = method;
        self
    }

    #[must_use]
    pub fn with_encoded_ids(mut self) -> Self {
        self.encode_ids = true;
        self
    }

    pub fn item_endpoint(&self, id: &str) -> String {
        if self.encode_ids {
            format!("{}/{}", self.endpoint, encode_path_segment(id))
        } else {
            format!("{}/{id}", self.endpoint)
        }
    }
}

/// Serialize `params` and keep only the fields that carry a value.
pub fn defined_fields<T: Serialize>(params: &T) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(params) {
        Ok(Value::Object(mut map)) => {
            map.retain(|_, v| !v.is_null());
            Ok(map)
        }
        Ok(_) => Ok(Map::new()),
        Err(e) => Err(ApiError::Serialization {
            detail: e.to_string(),
        }),
    }
}

/// Reject the first required string that is empty or only whitespace.
///
/// `fields` pairs each parameter name with its value.
pub fn require_non_empty(fields: &[(&str, &str)]) -> Result<(), String> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(format!("{name} must not be empty")),
        None => Ok(()),
    }
}

/// A change set holding one field.
pub fn single_change(key: &str, value: impl Into<Value>) -> Map<String, Value> {
    let mut changes = Map::new();
    changes.insert(key.to_string(), value.into());
    changes
}

/// `key=value` notes for every parameter not listed in `skip`.
pub fn describe_filters(query: &QueryParams, skip: &[&str]) -> Vec<String> {
    query
        .iter()
        .filter(|(k, _)| !skip.contains(k))
        .map(|(k, v)| format!("{k}={v}"))
        .collect()
}

/// Operation set for one collection.
pub struct Crud<R> {
    api: Arc<dyn WpApi>,
    config: EntityConfig,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Crud<R> {
    pub fn new(api: Arc<dyn WpApi>, config: EntityConfig) -> Self {
        Self {
            api,
            config,
            _resource: PhantomData,
        }
    }

    pub fn config(&self) -> &EntityConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    // ============ Raw operations ============

    pub async fn fetch_one(&self, id: &str) -> Result<R, ApiError> {
        let endpoint = self.config.item_endpoint(id);
        let body = self.api.call(&endpoint, RequestOptions::get()).await?;
        decode(&endpoint, body)
    }

    /// Fetch one page; also returns the `X-WP-Total` / `X-WP-TotalPages` values.
    pub async fn fetch_list(
        &self,
        query: QueryParams,
    ) -> Result<(Vec<R>, Option<u64>, Option<u64>), ApiError> {
        let response = self
            .api
            .send(&self.config.endpoint, RequestOptions::get().with_query(query))
            .await?;
        let items = decode(&self.config.endpoint, response.body)?;
        Ok((items, response.total, response.total_pages))
    }

    pub async fn create_one(&self, body: Value) -> Result<R, ApiError> {
        let body = self
            .api
            .call(&self.config.endpoint, RequestOptions::post(body))
            .await?;
        decode(&self.config.endpoint, body)
    }

    pub async fn update_one(&self, id: &str, changes: Map<String, Value>) -> Result<R, ApiError> {
        let endpoint = self.config.item_endpoint(id);
        let options = RequestOptions::json(self.config.update_method.clone(), Value::Object(changes));
        let body = self.api.call(&endpoint, options).await?;
        decode(&endpoint, body)
    }

    pub async fn delete_one(&self, id: &str, query: QueryParams) -> Result<Option<Value>, ApiError> {
        let endpoint = self.config.item_endpoint(id);
        self.api
            .call(&endpoint, RequestOptions::delete().with_query(query))
            .await
    }

    // ============ Envelope operations ============

    pub async fn create<T: Serialize>(&self, data: &T) -> ResponseEnvelope {
        let body = match serde_json::to_value(data) {
            Ok(body) => body,
            Err(e) => return ResponseEnvelope::failure("create", self.label(), e),
        };
        match self.create_one(body).await {
            Ok(item) => {
                tracing::debug!(entity = %self.label(), id = %item.id(), "created");
                ResponseEnvelope::text(format!("Created {}: {}", self.label(), item.summary()))
            }
            Err(e) => ResponseEnvelope::failure("create", self.label(), e),
        }
    }

    pub async fn get(&self, id: &str) -> ResponseEnvelope {
        match self.fetch_one(id).await {
            Ok(item) => ResponseEnvelope::item(self.label(), item.details()),
            Err(e) => ResponseEnvelope::failure("get", self.label(), e),
        }
    }

    /// Look an item up by slug; no match is a "nothing found" success.
    pub async fn find_by_slug(&self, slug: &str) -> ResponseEnvelope {
        let query = QueryParams::new().with("slug", slug);
        match self.fetch_list(query).await {
            Ok((items, _, _)) => match items.into_iter().next() {
                Some(item) => ResponseEnvelope::item(self.label(), item.details()),
                None => ResponseEnvelope::nothing_found(self.label()),
            },
            Err(e) => ResponseEnvelope::failure("get", self.label(), e),
        }
    }

    /// List one page. `filters` are echoed in the header.
    pub async fn list(&self, query: QueryParams, filters: &[String]) -> ResponseEnvelope {
        if let Some(raw) = query.get("per_page") {
            let valid = raw
                .parse::<u32>()
                .is_ok_and(|n| (1..=MAX_PER_PAGE).contains(&n));
            if !valid {
                return ResponseEnvelope::failure(
                    "list",
                    self.label(),
                    format!("per_page must be between 1 and {MAX_PER_PAGE}, got {raw}"),
                );
            }
        }

        match self.fetch_list(query).await {
            Ok((items, total, total_pages)) => {
                let mut notes = filters.to_vec();
                if let Some(total) = total {
                    notes.push(format!("total: {total}"));
                }
                if let Some(pages) = total_pages {
                    notes.push(format!("pages: {pages}"));
                }
                self.render_list(&items, &notes)
            }
            Err(e) => ResponseEnvelope::failure("list", self.label(), e),
        }
    }

    pub fn render_list(&self, items: &[R], notes: &[String]) -> ResponseEnvelope {
        ResponseEnvelope::list(
            self.label(),
            items.iter().map(Resource::summary).collect(),
            notes,
        )
    }

    /// Partial update with only the provided fields.
    ///
    /// An empty change set fails locally without calling the API.
    pub async fn update(
        &self,
        id: &str,
        changes: Map<String, Value>,
        updatable: &[&str],
    ) -> ResponseEnvelope {
        if changes.is_empty() {
            return ResponseEnvelope::failure(
                "update",
                self.label(),
                format!(
                    "provide at least one field to update ({})",
                    updatable.join(", ")
                ),
            );
        }
        match self.update_one(id, changes).await {
            Ok(item) => {
                tracing::debug!(entity = %self.label(), id = %item.id(), "updated");
                ResponseEnvelope::text(format!("Updated {}: {}", self.label(), item.summary()))
            }
            Err(e) => ResponseEnvelope::failure("update", self.label(), e),
        }
    }

    pub async fn delete(&self, id: &str, query: QueryParams) -> ResponseEnvelope {
        match self.delete_one(id, query).await {
            Ok(_) => ResponseEnvelope::text(format!("Deleted {}: ID {id}", self.label())),
            Err(e) => ResponseEnvelope::failure("delete", self.label(), e),
        }
    }

    /// Create every item in order; see [`bulk::render`] for the classification.
    pub async fn bulk_create<T: Serialize>(
        &self,
        items: Vec<T>,
        key_of: impl Fn(&T) -> String,
    ) -> ResponseEnvelope {
        if items.is_empty() {
            return ResponseEnvelope::failure("bulk create", self.label(), "no items given");
        }
        let result: BulkResult<R> = bulk::run_sequential(items, key_of, |item| async move {
            let body = serde_json::to_value(&item).map_err(|e| ApiError::Serialization {
                detail: e.to_string(),
            })?;
            self.create_one(body).await
        })
        .await;
        bulk::render("create", self.label(), &result, |_, item| item.summary())
    }

    /// Delete every ID in order; see [`bulk::render`] for the classification.
    pub async fn bulk_delete(&self, ids: &[u64], query: &QueryParams) -> ResponseEnvelope {
        if ids.is_empty() {
            return ResponseEnvelope::failure("bulk delete", self.label(), "no IDs given");
        }
        let result = bulk::run_sequential(
            ids.to_vec(),
            |id| format!("ID {id}"),
            |id| async move { self.delete_one(&id.to_string(), query.clone()).await },
        )
        .await;
        bulk::render("delete", self.label(), &result, |key, _| key.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_trimmed_and_ids_encoded_on_demand() {
        let config = EntityConfig::new("post", "/wp/v2/posts/");
        assert_eq!(config.item_endpoint("5"), "/wp/v2/posts/5");
        assert_eq!(config.update_method, Method::PUT);

        let config = EntityConfig::new("plugin", "/wp/v2/plugins")
            .with_encoded_ids()
            .with_update_method(Method::POST);
        assert_eq!(
            config.item_endpoint("hello-dolly/hello"),
            "/wp/v2/plugins/hello-dolly%2Fhello"
        );
    }

    #[test]
    fn defined_fields_drops_absent_values() {
        #[derive(Serialize)]
        struct Changes {
            title: Option<String>,
            content: Option<String>,
            #[serde(skip_serializing)]
            id: u64,
        }

        let changes = Changes {
            title: Some("New".to_string()),
            content: None,
            id: 3,
        };
        let map = defined_fields(&changes).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["title"], "New");
        assert!(!map.contains_key("id"));
        assert_eq!(changes.id, 3);
    }

    #[test]
    fn blank_required_strings_are_named() {
        assert!(require_non_empty(&[("title", "Hello"), ("content", "Body")]).is_ok());
        assert_eq!(
            require_non_empty(&[("title", "Hello"), ("content", "  ")]),
            Err("content must not be empty".to_string())
        );
        assert_eq!(
            require_non_empty(&[("type", ""), ("endpoint", "")]),
            Err("type must not be empty".to_string())
        );
    }

    #[test]
    fn filters_skip_basic_keys() {
        let query: QueryParams = [("page", "1"), ("author", "4"), ("tags", "3,7")]
            .into_iter()
            .collect();
        assert_eq!(
            describe_filters(&query, &["page"]),
            vec!["author=4".to_string(), "tags=3,7".to_string()]
        );
    }
}
