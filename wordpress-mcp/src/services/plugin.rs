use std::sync::Arc;

use serde_json::json;
use wordpress_mcp_client::types::Plugin;
use wordpress_mcp_client::{Method, QueryParams, WpApi};

use super::crud::{Crud, EntityConfig, Resource, require_non_empty, single_change};
use super::envelope::ResponseEnvelope;
use crate::schemas::plugin::{InstallPluginParams, ListPluginsParams, PluginParams};

const PLUGINS_ENDPOINT: &str = "/wp/v2/plugins";
const LABEL: &str = "plugin";

impl Resource for Plugin {
    fn id(&self) -> String {
        self.plugin.clone()
    }

    fn summary(&self) -> String {
        format!(
            "Plugin: {}, Name: {}, Status: {}, Version: {}",
            self.plugin, self.name, self.status, self.version
        )
    }

    fn details(&self) -> Vec<String> {
        let mut fields = vec![
            format!("Plugin: {}", self.plugin),
            format!("Name: {}", self.name),
            format!("Status: {}", self.status),
            format!("Version: {}", self.version),
        ];
        if !self.author.is_empty() {
            fields.push(format!("Author: {}", self.author));
        }
        if !self.description.rendered.is_empty() {
            fields.push(format!("Description: {}", self.description));
        }
        if !self.plugin_uri.is_empty() {
            fields.push(format!("Homepage: {}", self.plugin_uri));
        }
        fields
    }
}

/// Installed plugins; identifiers are `folder/file` paths.
pub struct PluginService {
    crud: Crud<Plugin>,
}

impl PluginService {
    pub fn new(api: Arc<dyn WpApi>) -> Self {
        let config = EntityConfig::new(LABEL, PLUGINS_ENDPOINT)
            .with_update_method(Method::POST)
            .with_encoded_ids();
        Self {
            crud: Crud::new(api, config),
        }
    }

    /// List installed plugins, filtered locally by activation status.
    pub async fn list(&self, params: &ListPluginsParams) -> ResponseEnvelope {
        match self.crud.fetch_list(QueryParams::new()).await {
            Ok((plugins, _, _)) => {
                let matching: Vec<Plugin> = plugins
                    .into_iter()
                    .filter(|p| params.status.matches(&p.status))
                    .collect();
                let notes = vec![format!("status: {}", params.status.as_str())];
                self.crud.render_list(&matching, &notes)
            }
            Err(e) => ResponseEnvelope::failure("list", LABEL, e),
        }
    }

    pub async fn get(&self, params: &PluginParams) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("plugin", &params.plugin)]) {
            return ResponseEnvelope::failure("get", LABEL, reason);
        }
        self.crud.get(&params.plugin).await
    }

    /// Install from the WordPress.org directory.
    pub async fn install(&self, params: &InstallPluginParams) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("slug", &params.slug)]) {
            return ResponseEnvelope::failure("install", LABEL, reason);
        }
        match self.crud.create_one(json!({ "slug": params.slug })).await {
            Ok(plugin) => ResponseEnvelope::text(format!("Installed {LABEL}: {}", plugin.summary())),
            Err(e) => ResponseEnvelope::failure("install", LABEL, e),
        }
    }

    pub async fn activate(&self, params: &PluginParams) -> ResponseEnvelope {
        self.set_status(&params.plugin, "active", "activate").await
    }

    pub async fn deactivate(&self, params: &PluginParams) -> ResponseEnvelope {
        self.set_status(&params.plugin, "inactive", "deactivate").await
    }

    async fn set_status(&self, plugin: &str, status: &str, action: &str) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("plugin", plugin)]) {
            return ResponseEnvelope::failure(action, LABEL, reason);
        }
        match self.crud.update_one(plugin, single_change("status", status)).await {
            Ok(updated) => ResponseEnvelope::text(format!(
                "{} {LABEL}: {}",
                if status == "active" { "Activated" } else { "Deactivated" },
                updated.summary()
            )),
            Err(e) => ResponseEnvelope::failure(action, LABEL, e),
        }
    }

    pub async fn delete(&self, params: &PluginParams) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("plugin", &params.plugin)]) {
            return ResponseEnvelope::failure("delete", LABEL, reason);
        }
        self.crud.delete(&params.plugin, QueryParams::new()).await
    }
}
