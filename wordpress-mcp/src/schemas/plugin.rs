//! Installed plugins.

use schemars::JsonSchema;
use serde::Deserialize;

use super::ActivationFilter;

/// Parameters for `list-plugins` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListPluginsParams {
    #[serde(default)]
    #[schemars(description = "Status filter: active, inactive or all (default: all)")]
    pub status: ActivationFilter,
}

/// Parameters for `get-plugin`, `activate-plugin`, `deactivate-plugin` and `delete-plugin`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PluginParams {
    #[schemars(
        description = "Plugin file path relative to the plugins directory, without .php (e.g. akismet/akismet)",
        length(min = 1)
    )]
    pub plugin: String,
}

/// Parameters for `install-plugin` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InstallPluginParams {
    #[schemars(description = "Plugin slug in the WordPress.org directory", length(min = 1))]
    pub slug: String,
}
