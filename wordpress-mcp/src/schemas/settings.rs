//! Site-wide settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::media::DiscussionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FrontPage {
    Posts,
    Page,
}

/// Parameters for `get-settings` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetSettingsParams {}

/// Parameters for `update-settings` tool. Only the given fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSettingsParams {
    // General
    #[schemars(description = "Site title")]
    pub title: Option<String>,

    #[schemars(description = "Site tagline")]
    pub description: Option<String>,

    #[schemars(description = "Site URL")]
    pub url: Option<String>,

    #[schemars(description = "Administration email address", email)]
    pub email: Option<String>,

    #[schemars(description = "Timezone (e.g. Europe/Paris)")]
    pub timezone: Option<String>,

    #[schemars(description = "Date format (PHP date syntax)")]
    pub date_format: Option<String>,

    #[schemars(description = "Time format (PHP date syntax)")]
    pub time_format: Option<String>,

    #[schemars(description = "First day of the week (0 = Sunday)", range(min = 0, max = 6))]
    pub start_of_week: Option<u8>,

    #[schemars(description = "Site language (locale)")]
    pub language: Option<String>,

    // Reading
    #[schemars(description = "Posts shown per page", range(min = 1))]
    pub posts_per_page: Option<u32>,

    #[schemars(description = "What the front page shows")]
    pub show_on_front: Option<FrontPage>,

    #[schemars(description = "ID of the static front page")]
    pub page_on_front: Option<u64>,

    #[schemars(description = "ID of the posts page")]
    pub page_for_posts: Option<u64>,

    // Discussion
    #[schemars(description = "Default comment status for new posts")]
    pub default_comment_status: Option<DiscussionStatus>,

    #[schemars(description = "Default ping status for new posts")]
    pub default_ping_status: Option<DiscussionStatus>,

    // Writing
    #[schemars(description = "Default category ID", range(min = 1))]
    pub default_category: Option<u64>,

    #[schemars(description = "Default post format")]
    pub default_post_format: Option<String>,

    // Permalinks
    #[schemars(description = "Permalink structure (e.g. /%postname%/)")]
    pub permalink_structure: Option<String>,

    // Identity
    #[schemars(description = "Site icon media ID")]
    pub site_icon: Option<u64>,

    #[schemars(description = "Site logo media ID")]
    pub site_logo: Option<u64>,
}
