//! Media library attachments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{SortOrder, default_order_desc, default_page, default_per_page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Application,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaOrderBy {
    Author,
    #[default]
    Date,
    Id,
    Include,
    Modified,
    Parent,
    Relevance,
    Slug,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    #[default]
    Inherit,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiscussionStatus {
    Open,
    Closed,
}

/// Parameters for `list-media` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListMediaParams {
    #[serde(default = "default_page")]
    #[schemars(description = "Page number (default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_per_page")]
    #[schemars(description = "Items per page (default: 10, max: 100)", range(min = 1, max = 100))]
    pub per_page: u32,

    #[schemars(description = "Search keyword")]
    pub search: Option<String>,

    #[schemars(description = "Media type filter")]
    pub media_type: Option<MediaType>,

    #[serde(default = "default_order_desc")]
    #[schemars(description = "Sort direction (default: desc)")]
    pub order: SortOrder,

    #[serde(default)]
    #[schemars(description = "Sort field (default: date)")]
    pub orderby: MediaOrderBy,
}

/// Parameters for `get-media` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetMediaParams {
    #[schemars(description = "Media item ID")]
    pub id: u64,
}

/// Parameters for `create-media` tool.
///
/// The file comes either from `file_path` or from `data_base64` + `file_name`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateMediaParams {
    #[serde(skip_serializing)]
    #[schemars(description = "Path of a local file to upload")]
    pub file_path: Option<String>,

    #[serde(skip_serializing)]
    #[schemars(description = "Base64-encoded file content (alternative to file_path)")]
    pub data_base64: Option<String>,

    #[serde(skip_serializing)]
    #[schemars(description = "File name for base64 uploads; overrides the name taken from file_path")]
    pub file_name: Option<String>,

    #[serde(skip_serializing)]
    #[schemars(description = "MIME type (guessed from the file extension when omitted)")]
    pub mime_type: Option<String>,

    #[schemars(description = "Title")]
    pub title: Option<String>,

    #[serde(default)]
    #[schemars(description = "Status (default: inherit)")]
    pub status: MediaStatus,

    #[schemars(description = "Alternative text")]
    pub alt_text: Option<String>,

    #[schemars(description = "Caption")]
    pub caption: Option<String>,

    #[schemars(description = "Description")]
    pub description: Option<String>,

    #[schemars(description = "ID of the content item to attach to")]
    pub post: Option<u64>,

    #[schemars(description = "Author user ID")]
    pub author: Option<u64>,
}

/// Parameters for `update-media` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateMediaParams {
    #[serde(skip_serializing)]
    #[schemars(description = "Media item ID")]
    pub id: u64,

    #[schemars(description = "Title")]
    pub title: Option<String>,

    #[schemars(description = "Status")]
    pub status: Option<MediaStatus>,

    #[schemars(description = "Alternative text")]
    pub alt_text: Option<String>,

    #[schemars(description = "Caption")]
    pub caption: Option<String>,

    #[schemars(description = "Description")]
    pub description: Option<String>,

    #[schemars(description = "ID of the content item to attach to")]
    pub post: Option<u64>,

    #[schemars(description = "Author user ID")]
    pub author: Option<u64>,

    #[schemars(description = "Slug")]
    pub slug: Option<String>,

    #[schemars(description = "Comment status")]
    pub comment_status: Option<DiscussionStatus>,

    #[schemars(description = "Ping status")]
    pub ping_status: Option<DiscussionStatus>,
}

/// Parameters for `edit-media-metadata` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EditMediaMetadataParams {
    #[serde(skip_serializing)]
    #[schemars(description = "Media item ID")]
    pub id: u64,

    #[schemars(description = "Alternative text")]
    pub alt_text: Option<String>,

    #[schemars(description = "Caption")]
    pub caption: Option<String>,

    #[schemars(description = "Description")]
    pub description: Option<String>,

    #[schemars(description = "Title")]
    pub title: Option<String>,
}

/// Parameters for `delete-media` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeleteMediaParams {
    #[schemars(description = "Media item ID")]
    pub id: u64,

    #[serde(default)]
    #[schemars(description = "Delete permanently (default: false)")]
    pub force: bool,
}
