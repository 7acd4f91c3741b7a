use std::collections::BTreeMap;
use std::sync::Arc;

use wordpress_mcp_client::types::{ContentItem, ContentTypeInfo, decode};
use wordpress_mcp_client::{QueryParams, RequestOptions, WpApi};

use super::crud::{
    Crud, EntityConfig, Resource, defined_fields, describe_filters, require_non_empty,
};
use super::envelope::ResponseEnvelope;
use crate::schemas::content::{
    BulkCreateContentParams, BulkDeleteContentParams, CreateContentParams, DeleteContentParams,
    GetContentParams, ListContentParams, QueryContentParams, UpdateContentParams,
};

const TYPES_ENDPOINT: &str = "/wp/v2/types";

/// Parameters shared by `list-content` and `query-content`; not echoed as filters.
const BASIC_QUERY_KEYS: &[&str] = &["page", "per_page", "status", "search", "order", "orderby"];

const UPDATABLE: &[&str] = &["title", "content", "status"];

impl Resource for ContentItem {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn summary(&self) -> String {
        let mut line = format!("ID: {}, Title: {}, Status: {}", self.id, self.title, self.status);
        if let Some(date) = &self.date {
            line.push_str(&format!(", Date: {date}"));
        }
        line
    }

    fn details(&self) -> Vec<String> {
        let mut fields = vec![
            format!("ID: {}", self.id),
            format!("Title: {}", self.title),
            format!("Status: {}", self.status),
        ];
        if !self.kind.is_empty() {
            fields.push(format!("Type: {}", self.kind));
        }
        if !self.slug.is_empty() {
            fields.push(format!("Slug: {}", self.slug));
        }
        if let Some(author) = self.author {
            fields.push(format!("Author: {author}"));
        }
        if let Some(date) = &self.date {
            fields.push(format!("Published: {date}"));
        }
        if let Some(modified) = &self.modified {
            fields.push(format!("Modified: {modified}"));
        }
        if !self.link.is_empty() {
            fields.push(format!("Link: {}", self.link));
        }
        fields
    }
}

/// Posts, pages and custom post types addressed by `type` + `endpoint`.
pub struct ContentService {
    api: Arc<dyn WpApi>,
}

impl ContentService {
    pub fn new(api: Arc<dyn WpApi>) -> Self {
        Self { api }
    }

    /// Operation set for the addressed type, or a failure envelope for `action`
    /// when the routing fields are blank.
    fn crud(
        &self,
        kind: &str,
        endpoint: &str,
        action: &str,
    ) -> Result<Crud<ContentItem>, ResponseEnvelope> {
        require_non_empty(&[("type", kind), ("endpoint", endpoint)]).map_err(|reason| {
            let label = if kind.trim().is_empty() { "content" } else { kind };
            ResponseEnvelope::failure(action, label, reason)
        })?;
        Ok(Crud::new(
            Arc::clone(&self.api),
            EntityConfig::new(kind, endpoint),
        ))
    }

    pub async fn list_types(&self) -> ResponseEnvelope {
        let types: BTreeMap<String, ContentTypeInfo> = match self
            .api
            .call(TYPES_ENDPOINT, RequestOptions::get())
            .await
            .and_then(|body| decode(TYPES_ENDPOINT, body))
        {
            Ok(types) => types,
            Err(e) => return ResponseEnvelope::failure("list", "content types", e),
        };
        if types.is_empty() {
            return ResponseEnvelope::nothing_found("content types");
        }

        let mut blocks = vec!["Available content types:".to_string()];
        blocks.extend(types.iter().map(|(slug, info)| {
            let rest_base = info.rest_base.as_deref().unwrap_or(slug);
            let mut block = format!(
                "Type: {slug} ({})\nEndpoint: /wp/v2/{rest_base}",
                info.name
            );
            if let Some(supports) = info.supports.as_ref().and_then(|s| s.as_object()) {
                let features: Vec<&str> = supports
                    .iter()
                    .filter(|(_, enabled)| enabled.as_bool().unwrap_or(true))
                    .map(|(name, _)| name.as_str())
                    .collect();
                if !features.is_empty() {
                    block.push_str(&format!("\nSupports: {}", features.join(", ")));
                }
            }
            if !info.description.is_empty() {
                block.push_str(&format!("\nDescription: {}", info.description));
            }
            block
        }));
        ResponseEnvelope::success(blocks)
    }

    pub async fn list(&self, params: &ListContentParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "list") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        match QueryParams::from_serializable(params) {
            Ok(query) => crud.list(query, &[]).await,
            Err(e) => ResponseEnvelope::failure("list", crud.label(), e),
        }
    }

    pub async fn query(&self, params: &QueryContentParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "query") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        match QueryParams::from_serializable(params) {
            Ok(query) => {
                let filters = describe_filters(&query, BASIC_QUERY_KEYS);
                crud.list(query, &filters).await
            }
            Err(e) => ResponseEnvelope::failure("query", crud.label(), e),
        }
    }

    pub async fn get(&self, params: &GetContentParams) -> ResponseEnvelope {
        match self.crud(&params.kind, &params.endpoint, "get") {
            Ok(crud) => crud.get(&params.id.to_string()).await,
            Err(envelope) => envelope,
        }
    }

    pub async fn create(&self, params: &CreateContentParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "create") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        if let Err(reason) = require_non_empty(&[
            ("title", &params.title),
            ("content", &params.content),
        ]) {
            return ResponseEnvelope::failure("create", crud.label(), reason);
        }
        crud.create(&params.data()).await
    }

    /// Every item is checked before the first request is sent.
    pub async fn bulk_create(&self, params: BulkCreateContentParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "bulk create") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        let invalid = params.items.iter().enumerate().find_map(|(index, item)| {
            require_non_empty(&[("title", &item.title), ("content", &item.content)])
                .err()
                .map(|reason| format!("item {}: {reason}", index + 1))
        });
        if let Some(reason) = invalid {
            return ResponseEnvelope::failure("bulk create", crud.label(), reason);
        }
        crud.bulk_create(params.items, |item| item.title.clone())
            .await
    }

    pub async fn update(&self, params: &UpdateContentParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "update") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        match defined_fields(params) {
            Ok(changes) => crud.update(&params.id.to_string(), changes, UPDATABLE).await,
            Err(e) => ResponseEnvelope::failure("update", crud.label(), e),
        }
    }

    pub async fn delete(&self, params: &DeleteContentParams) -> ResponseEnvelope {
        match self.crud(&params.kind, &params.endpoint, "delete") {
            Ok(crud) => {
                crud.delete(
                    &params.id.to_string(),
                    QueryParams::new().with("force", params.force),
                )
                .await
            }
            Err(envelope) => envelope,
        }
    }

    pub async fn bulk_delete(&self, params: &BulkDeleteContentParams) -> ResponseEnvelope {
        match self.crud(&params.kind, &params.endpoint, "bulk delete") {
            Ok(crud) => {
                crud.bulk_delete(&params.ids, &QueryParams::new().with("force", params.force))
                    .await
            }
            Err(envelope) => envelope,
        }
    }
}
