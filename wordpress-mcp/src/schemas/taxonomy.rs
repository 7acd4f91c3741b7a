//! Taxonomies and their terms (categories, tags, custom taxonomies).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{SortOrder, default_order_asc, default_page, default_per_page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TermOrderBy {
    #[default]
    Name,
    Id,
    Slug,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum MetaCompare {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "NOT IN")]
    NotIn,
}

/// Parameters for `list-taxonomies` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListTaxonomiesParams {}

/// Parameters for `list-terms` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListTermsParams {
    #[serde(rename = "type", skip_serializing)]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[serde(skip_serializing)]
    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[serde(default = "default_page")]
    #[schemars(description = "Page number (default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[schemars(description = "Items per page (default: 10, max: 100)", range(min = 1, max = 100))]
    pub per_page: u32,

    #[schemars(description = "Search keyword")]
    pub search: Option<String>,

    #[serde(default = "default_order_asc")]
    #[schemars(description = "Sort direction (default: asc)")]
    pub order: SortOrder,

    #[serde(default)]
    #[schemars(description = "Sort field (default: name)")]
    pub orderby: TermOrderBy,

    #[schemars(description = "Hide terms not assigned to any content")]
    pub hide_empty: Option<bool>,

    #[schemars(description = "Parent term ID")]
    pub parent: Option<u64>,

    #[schemars(description = "Only terms assigned to this content ID")]
    pub post: Option<u64>,

    #[schemars(description = "Filter by slug")]
    pub slug: Option<String>,
}

/// Parameters for `query-terms` tool: `list-terms` plus advanced filters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct QueryTermsParams {
    #[serde(rename = "type", skip_serializing)]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[serde(skip_serializing)]
    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[serde(default = "default_page")]
    #[schemars(description = "Page number (default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[schemars(description = "Items per page (default: 10, max: 100)", range(min = 1, max = 100))]
    pub per_page: u32,

    #[schemars(description = "Search keyword")]
    pub search: Option<String>,

    #[serde(default = "default_order_asc")]
    #[schemars(description = "Sort direction (default: asc)")]
    pub order: SortOrder,

    #[serde(default)]
    #[schemars(description = "Sort field (default: name)")]
    pub orderby: TermOrderBy,

    #[schemars(description = "Hide terms not assigned to any content")]
    pub hide_empty: Option<bool>,

    #[schemars(description = "Parent term ID")]
    pub parent: Option<u64>,

    #[schemars(description = "Only terms assigned to this content ID")]
    pub post: Option<u64>,

    #[schemars(description = "Filter by slug")]
    pub slug: Option<String>,

    #[schemars(description = "Only these term IDs")]
    pub include: Option<Vec<u64>>,

    #[schemars(description = "Exclude these term IDs")]
    pub exclude: Option<Vec<u64>>,

    #[schemars(description = "Meta key to filter on")]
    pub meta_key: Option<String>,

    #[schemars(description = "Meta value to compare against")]
    pub meta_value: Option<String>,

    #[schemars(description = "Meta comparison operator")]
    pub meta_compare: Option<MetaCompare>,
}

/// Parameters for `get-term-by-id` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetTermParams {
    #[serde(rename = "type")]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[schemars(description = "Term ID")]
    pub id: u64,
}

/// Parameters for `get-term-by-slug` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetTermBySlugParams {
    #[serde(rename = "type")]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[schemars(description = "Term slug", length(min = 1))]
    pub slug: String,
}

/// Fields of one term to create.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TermData {
    #[schemars(description = "Term name", length(min = 1))]
    pub name: String,

    #[schemars(description = "URL-friendly slug")]
    pub slug: Option<String>,

    #[schemars(description = "Description")]
    pub description: Option<String>,

    #[schemars(description = "Parent term ID (hierarchical taxonomies only)")]
    pub parent: Option<u64>,

    #[schemars(description = "Term meta")]
    pub meta: Option<Map<String, Value>>,
}

/// Parameters for `create-term` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTermParams {
    #[serde(rename = "type")]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[schemars(description = "Term name", length(min = 1))]
    pub name: String,

    #[schemars(description = "URL-friendly slug")]
    pub slug: Option<String>,

    #[schemars(description = "Description")]
    pub description: Option<String>,

    #[schemars(description = "Parent term ID (hierarchical taxonomies only)")]
    pub parent: Option<u64>,

    #[schemars(description = "Term meta")]
    pub meta: Option<Map<String, Value>>,
}

impl CreateTermParams {
    pub fn data(&self) -> TermData {
        TermData {
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            parent: self.parent,
            meta: self.meta.clone(),
        }
    }
}

/// Parameters for `bulk-create-terms` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkCreateTermsParams {
    #[serde(rename = "type")]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[schemars(description = "Terms to create, processed in order", length(min = 1))]
    pub terms: Vec<TermData>,
}

/// Parameters for `update-term` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTermParams {
    #[serde(rename = "type", skip_serializing)]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[serde(skip_serializing)]
    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[serde(skip_serializing)]
    #[schemars(description = "Term ID")]
    pub id: u64,

    #[schemars(description = "New name")]
    pub name: Option<String>,

    #[schemars(description = "New slug")]
    pub slug: Option<String>,

    #[schemars(description = "New description")]
    pub description: Option<String>,

    #[schemars(description = "New parent term ID")]
    pub parent: Option<u64>,

    #[schemars(description = "Term meta to set")]
    pub meta: Option<Map<String, Value>>,
}

/// Parameters for `delete-term` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeleteTermParams {
    #[serde(rename = "type")]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[schemars(description = "Term ID")]
    pub id: u64,

    #[serde(default = "force_terms")]
    #[schemars(description = "Delete permanently (terms do not support trash, default: true)")]
    pub force: bool,
}

/// Parameters for `bulk-delete-terms` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkDeleteTermsParams {
    #[serde(rename = "type")]
    #[schemars(description = "Taxonomy (category, post_tag or a custom taxonomy)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the taxonomy (e.g. /wp/v2/categories)")]
    pub endpoint: String,

    #[schemars(description = "Term IDs to delete, processed in order", length(min = 1))]
    pub ids: Vec<u64>,

    #[serde(default = "force_terms")]
    #[schemars(description = "Delete permanently (terms do not support trash, default: true)")]
    pub force: bool,
}

const fn force_terms() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_terms_defaults_sort_by_name_ascending() {
        let params: ListTermsParams = serde_json::from_value(json!({
            "type": "category",
            "endpoint": "/wp/v2/categories"
        }))
        .unwrap();

        assert_eq!(params.order, SortOrder::Asc);
        assert_eq!(params.orderby, TermOrderBy::Name);
        assert_eq!(params.per_page, 10);
    }

    #[test]
    fn meta_compare_uses_operator_spelling() {
        let params: QueryTermsParams = serde_json::from_value(json!({
            "type": "category",
            "endpoint": "/wp/v2/categories",
            "meta_compare": "NOT LIKE"
        }))
        .unwrap();

        assert_eq!(params.meta_compare, Some(MetaCompare::NotLike));
        assert_eq!(serde_json::to_value(&params).unwrap()["meta_compare"], "NOT LIKE");
    }

    #[test]
    fn term_deletes_default_to_force() {
        let params: DeleteTermParams = serde_json::from_value(json!({
            "type": "post_tag",
            "endpoint": "/wp/v2/tags",
            "id": 4
        }))
        .unwrap();
        assert!(params.force);
    }
}
