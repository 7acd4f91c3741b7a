//! Installed themes.

use schemars::JsonSchema;
use serde::Deserialize;

use super::ActivationFilter;

/// Parameters for `list-themes` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListThemesParams {
    #[serde(default)]
    #[schemars(description = "Status filter: active, inactive or all (default: all)")]
    pub status: ActivationFilter,
}

/// Parameters for `get-theme`, `activate-theme` and `delete-theme`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ThemeParams {
    #[schemars(description = "Theme stylesheet identifier (e.g. twentytwentyfour)", length(min = 1))]
    pub stylesheet: String,
}

/// Parameters for `install-theme` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InstallThemeParams {
    #[schemars(description = "Theme slug in the WordPress.org directory", length(min = 1))]
    pub slug: String,
}
