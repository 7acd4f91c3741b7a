use std::collections::BTreeMap;
use std::sync::Arc;

use wordpress_mcp_client::types::{TaxonomyInfo, Term, decode};
use wordpress_mcp_client::{QueryParams, RequestOptions, WpApi};

use super::crud::{
    Crud, EntityConfig, Resource, defined_fields, describe_filters, require_non_empty,
};
use super::envelope::ResponseEnvelope;
use crate::schemas::taxonomy::{
    BulkCreateTermsParams, BulkDeleteTermsParams, CreateTermParams, DeleteTermParams,
    GetTermBySlugParams, GetTermParams, ListTermsParams, QueryTermsParams, UpdateTermParams,
};

const TAXONOMIES_ENDPOINT: &str = "/wp/v2/taxonomies";

const BASIC_QUERY_KEYS: &[&str] = &["page", "per_page", "search", "order", "orderby"];

const UPDATABLE: &[&str] = &["name", "slug", "description", "parent", "meta"];

impl Resource for Term {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Name: {}, Slug: {}, Count: {}",
            self.id, self.name, self.slug, self.count
        )
    }

    fn details(&self) -> Vec<String> {
        let mut fields = vec![
            format!("ID: {}", self.id),
            format!("Name: {}", self.name),
            format!("Slug: {}", self.slug),
        ];
        if !self.description.is_empty() {
            fields.push(format!("Description: {}", self.description));
        }
        if self.parent != 0 {
            fields.push(format!("Parent ID: {}", self.parent));
        }
        fields.push(format!("Count: {}", self.count));
        if !self.link.is_empty() {
            fields.push(format!("Link: {}", self.link));
        }
        fields
    }
}

/// Terms of any taxonomy addressed by `type` + `endpoint`.
pub struct TaxonomyService {
    api: Arc<dyn WpApi>,
}

impl TaxonomyService {
    pub fn new(api: Arc<dyn WpApi>) -> Self {
        Self { api }
    }

    fn crud(
        &self,
        kind: &str,
        endpoint: &str,
        action: &str,
    ) -> Result<Crud<Term>, ResponseEnvelope> {
        require_non_empty(&[("type", kind), ("endpoint", endpoint)]).map_err(|reason| {
            let label = if kind.trim().is_empty() { "term" } else { kind };
            ResponseEnvelope::failure(action, label, reason)
        })?;
        Ok(Crud::new(
            Arc::clone(&self.api),
            EntityConfig::new(kind, endpoint),
        ))
    }

    pub async fn list_taxonomies(&self) -> ResponseEnvelope {
        let taxonomies: BTreeMap<String, TaxonomyInfo> = match self
            .api
            .call(TAXONOMIES_ENDPOINT, RequestOptions::get())
            .await
            .and_then(|body| decode(TAXONOMIES_ENDPOINT, body))
        {
            Ok(taxonomies) => taxonomies,
            Err(e) => return ResponseEnvelope::failure("list", "taxonomies", e),
        };
        if taxonomies.is_empty() {
            return ResponseEnvelope::nothing_found("taxonomies");
        }

        let mut blocks = vec!["Available taxonomies:".to_string()];
        blocks.extend(taxonomies.iter().map(|(slug, info)| {
            let rest_base = info.rest_base.as_deref().unwrap_or(slug);
            let mut block = format!(
                "Type: {slug} ({})\nEndpoint: /wp/v2/{rest_base}\nHierarchical: {}",
                info.name,
                if info.hierarchical { "yes" } else { "no" }
            );
            if !info.types.is_empty() {
                block.push_str(&format!("\nUsed by: {}", info.types.join(", ")));
            }
            if !info.description.is_empty() {
                block.push_str(&format!("\nDescription: {}", info.description));
            }
            block
        }));
        ResponseEnvelope::success(blocks)
    }

    pub async fn list(&self, params: &ListTermsParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "list") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        match QueryParams::from_serializable(params) {
            Ok(query) => crud.list(query, &[]).await,
            Err(e) => ResponseEnvelope::failure("list", crud.label(), e),
        }
    }

    pub async fn query(&self, params: &QueryTermsParams) -> ResponseEnvelope {
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

    pub async fn get(&self, params: &GetTermParams) -> ResponseEnvelope {
        match self.crud(&params.kind, &params.endpoint, "get") {
            Ok(crud) => crud.get(&params.id.to_string()).await,
            Err(envelope) => envelope,
        }
    }

    pub async fn get_by_slug(&self, params: &GetTermBySlugParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "get") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        if let Err(reason) = require_non_empty(&[("slug", &params.slug)]) {
            return ResponseEnvelope::failure("get", crud.label(), reason);
        }
        crud.find_by_slug(&params.slug).await
    }

    pub async fn create(&self, params: &CreateTermParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "create") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        if let Err(reason) = require_non_empty(&[("name", &params.name)]) {
            return ResponseEnvelope::failure("create", crud.label(), reason);
        }
        match defined_fields(&params.data()) {
            Ok(body) => crud.create(&body).await,
            Err(e) => ResponseEnvelope::failure("create", crud.label(), e),
        }
    }

    /// Every term is checked before the first request is sent.
    pub async fn bulk_create(&self, params: BulkCreateTermsParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "bulk create") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        let mut bodies = Vec::with_capacity(params.terms.len());
        for (index, term) in params.terms.iter().enumerate() {
            if let Err(reason) = require_non_empty(&[("name", &term.name)]) {
                let reason = format!("item {}: {reason}", index + 1);
                return ResponseEnvelope::failure("bulk create", crud.label(), reason);
            }
            match defined_fields(term) {
                Ok(body) => bodies.push(body),
                Err(e) => return ResponseEnvelope::failure("bulk create", crud.label(), e),
            }
        }
        crud.bulk_create(bodies, |body| {
            body.get("name")
                .and_then(|n| n.as_str())
                .unwrap_or_default()
                .to_string()
        })
        .await
    }

    pub async fn update(&self, params: &UpdateTermParams) -> ResponseEnvelope {
        let crud = match self.crud(&params.kind, &params.endpoint, "update") {
            Ok(crud) => crud,
            Err(envelope) => return envelope,
        };
        match defined_fields(params) {
            Ok(changes) => crud.update(&params.id.to_string(), changes, UPDATABLE).await,
            Err(e) => ResponseEnvelope::failure("update", crud.label(), e),
        }
    }

    pub async fn delete(&self, params: &DeleteTermParams) -> ResponseEnvelope {
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

    pub async fn bulk_delete(&self, params: &BulkDeleteTermsParams) -> ResponseEnvelope {
        match self.crud(&params.kind, &params.endpoint, "bulk delete") {
            Ok(crud) => {
                crud.bulk_delete(&params.ids, &QueryParams::new().with("force", params.force))
                    .await
            }
            Err(envelope) => envelope,
        }
    }
}
