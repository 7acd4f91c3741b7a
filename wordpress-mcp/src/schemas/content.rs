//! Posts, pages and custom post types.
//!
//! Every content tool takes the content `type` label plus its REST `endpoint`,
//! as reported by `list-content-types`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{OneOrMany, SortOrder, default_order_desc, default_page, default_per_page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
}

/// Status filter for listings; `any` matches every status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatusFilter {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
    Any,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentOrderBy {
    #[default]
    Date,
    Title,
    Id,
    Author,
    Modified,
    Relevance,
    Slug,
    Include,
    MenuOrder,
}

/// Parameters for `list-content-types` tool.
///
/// This tool takes no parameters, but we need an empty struct for the schema.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListContentTypesParams {}

/// Parameters for `list-content` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListContentParams {
    #[serde(rename = "type", skip_serializing)]
    #[schemars(description = "Content type (post, page or a custom type)")]
    pub kind: String,

    #[serde(skip_serializing)]
    #[schemars(description = "REST endpoint of the content type (e.g. /wp/v2/posts)")]
    pub endpoint: String,

    #[serde(default = "default_page")]
    #[schemars(description = "Page number (default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[schemars(description = "Items per page (default: 10, max: 100)", range(min = 1, max = 100))]
    pub per_page: u32,

    #[serde(default)]
    #[schemars(description = "Status filter (default: publish)")]
    pub status: ContentStatusFilter,

    #[schemars(description = "Search keyword")]
    pub search: Option<String>,

    #[serde(default = "default_order_desc")]
    #[schemars(description = "Sort direction (default: desc)")]
    pub order: SortOrder,

    #[serde(default)]
    #[schemars(description = "Sort field (default: date)")]
    pub orderby: ContentOrderBy,
}

/// Parameters for `query-content` tool: `list-content` plus advanced filters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct QueryContentParams {
    #[serde(rename = "type", skip_serializing)]
    #[schemars(description = "Content type (post, page or a custom type)")]
    pub kind: String,

    #[serde(skip_serializing)]
    #[schemars(description = "REST endpoint of the content type (e.g. /wp/v2/posts)")]
    pub endpoint: String,

    #[serde(default = "default_page")]
    #[schemars(description = "Page number (default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[schemars(description = "Items per page (default: 10, max: 100)", range(min = 1, max = 100))]
    pub per_page: u32,

    #[serde(default)]
    #[schemars(description = "Status filter (default: publish)")]
    pub status: ContentStatusFilter,

    #[schemars(description = "Search keyword")]
    pub search: Option<String>,

    #[serde(default = "default_order_desc")]
    #[schemars(description = "Sort direction (default: desc)")]
    pub order: SortOrder,

    #[serde(default)]
    #[schemars(description = "Sort field (default: date)")]
    pub orderby: ContentOrderBy,

    #[schemars(description = "Published after (ISO 8601, YYYY-MM-DDTHH:MM:SS)")]
    pub after: Option<String>,

    #[schemars(description = "Published before (ISO 8601, YYYY-MM-DDTHH:MM:SS)")]
    pub before: Option<String>,

    #[schemars(description = "Author ID or list of author IDs")]
    pub author: Option<OneOrMany<u64>>,

    #[schemars(description = "Author ID or list of author IDs to exclude")]
    pub author_exclude: Option<OneOrMany<u64>>,

    #[schemars(description = "Category ID or list of category IDs")]
    pub categories: Option<OneOrMany<u64>>,

    #[schemars(description = "Category ID or list of category IDs to exclude")]
    pub categories_exclude: Option<OneOrMany<u64>>,

    #[schemars(description = "Tag ID or list of tag IDs")]
    pub tags: Option<OneOrMany<u64>>,

    #[schemars(description = "Tag ID or list of tag IDs to exclude")]
    pub tags_exclude: Option<OneOrMany<u64>>,

    #[schemars(description = "Only these IDs")]
    pub include: Option<Vec<u64>>,

    #[schemars(description = "Exclude these IDs")]
    pub exclude: Option<Vec<u64>>,

    #[schemars(description = "Only sticky (true) or non-sticky (false) posts")]
    pub sticky: Option<bool>,

    #[schemars(description = "Slug or list of slugs")]
    pub slug: Option<OneOrMany<String>>,
}

/// Parameters for `get-content-by-id` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetContentParams {
    #[serde(rename = "type")]
    #[schemars(description = "Content type (post, page or a custom type)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the content type (e.g. /wp/v2/posts)")]
    pub endpoint: String,

    #[schemars(description = "Content ID")]
    pub id: u64,
}

/// Fields of one content item to create.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContentData {
    #[schemars(description = "Title", length(min = 1))]
    pub title: String,

    #[schemars(description = "Body content", length(min = 1))]
    pub content: String,

    #[serde(default)]
    #[schemars(description = "Status (default: publish)")]
    pub status: ContentStatus,
}

/// Parameters for `create-content` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateContentParams {
    #[serde(rename = "type")]
    #[schemars(description = "Content type (post, page or a custom type)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the content type (e.g. /wp/v2/posts)")]
    pub endpoint: String,

    #[schemars(description = "Title", length(min = 1))]
    pub title: String,

    #[schemars(description = "Body content", length(min = 1))]
    pub content: String,

    #[serde(default)]
    #[schemars(description = "Status (default: publish)")]
    pub status: ContentStatus,
}

impl CreateContentParams {
    pub fn data(&self) -> ContentData {
        ContentData {
            title: self.title.clone(),
            content: self.content.clone(),
            status: self.status,
        }
    }
}

/// Parameters for `bulk-create-content` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkCreateContentParams {
    #[serde(rename = "type")]
    #[schemars(description = "Content type (post, page or a custom type)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the content type (e.g. /wp/v2/posts)")]
    pub endpoint: String,

    #[schemars(description = "Items to create, processed in order", length(min = 1))]
    pub items: Vec<ContentData>,
}

/// Parameters for `update-content` tool.
///
/// At least one of `title`, `content`, `status` must be given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateContentParams {
    #[serde(rename = "type", skip_serializing)]
    #[schemars(description = "Content type (post, page or a custom type)")]
    pub kind: String,

    #[serde(skip_serializing)]
    #[schemars(description = "REST endpoint of the content type (e.g. /wp/v2/posts)")]
    pub endpoint: String,

    #[serde(skip_serializing)]
    #[schemars(description = "Content ID")]
    pub id: u64,

    #[schemars(description = "New title")]
    pub title: Option<String>,

    #[schemars(description = "New body content")]
    pub content: Option<String>,

    #[schemars(description = "New status")]
    pub status: Option<ContentStatus>,
}

/// Parameters for `delete-content-by-id` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeleteContentParams {
    #[serde(rename = "type")]
    #[schemars(description = "Content type (post, page or a custom type)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the content type (e.g. /wp/v2/posts)")]
    pub endpoint: String,

    #[schemars(description = "Content ID")]
    pub id: u64,

    #[serde(default)]
    #[schemars(description = "Delete permanently instead of moving to trash (default: false)")]
    pub force: bool,
}

/// Parameters for `bulk-delete-content` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkDeleteContentParams {
    #[serde(rename = "type")]
    #[schemars(description = "Content type (post, page or a custom type)")]
    pub kind: String,

    #[schemars(description = "REST endpoint of the content type (e.g. /wp/v2/posts)")]
    pub endpoint: String,

    #[schemars(description = "IDs to delete, processed in order", length(min = 1))]
    pub ids: Vec<u64>,

    #[serde(default)]
    #[schemars(description = "Delete permanently instead of moving to trash (default: false)")]
    pub force: bool,
}
