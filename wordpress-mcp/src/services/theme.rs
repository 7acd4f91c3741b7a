use std::sync::Arc;

use serde_json::json;
use wordpress_mcp_client::types::Theme;
use wordpress_mcp_client::{Method, QueryParams, WpApi};

use super::crud::{Crud, EntityConfig, Resource, require_non_empty, single_change};
use super::envelope::ResponseEnvelope;
use crate::schemas::theme::{InstallThemeParams, ListThemesParams, ThemeParams};

const THEMES_ENDPOINT: &str = "/wp/v2/themes";
const LABEL: &str = "theme";

impl Resource for Theme {
    fn id(&self) -> String {
        self.stylesheet.clone()
    }

    fn summary(&self) -> String {
        format!(
            "Stylesheet: {}, Name: {}, Status: {}, Version: {}",
            self.stylesheet, self.name, self.status, self.version
        )
    }

    fn details(&self) -> Vec<String> {
        let mut fields = vec![
            format!("Stylesheet: {}", self.stylesheet),
            format!("Name: {}", self.name),
            format!("Status: {}", self.status),
            format!("Version: {}", self.version),
        ];
        if !self.template.is_empty() && self.template != self.stylesheet {
            fields.push(format!("Parent theme: {}", self.template));
        }
        if !self.author.rendered.is_empty() {
            fields.push(format!("Author: {}", self.author));
        }
        if !self.description.rendered.is_empty() {
            fields.push(format!("Description: {}", self.description));
        }
        fields
    }
}

pub struct ThemeService {
    crud: Crud<Theme>,
}

impl ThemeService {
    pub fn new(api: Arc<dyn WpApi>) -> Self {
        let config = EntityConfig::new(LABEL, THEMES_ENDPOINT)
            .with_update_method(Method::POST)
            .with_encoded_ids();
        Self {
            crud: Crud::new(api, config),
        }
    }

    /// List installed themes, filtered locally by activation status.
    pub async fn list(&self, params: &ListThemesParams) -> ResponseEnvelope {
        match self.crud.fetch_list(QueryParams::new()).await {
            Ok((themes, _, _)) => {
                let matching: Vec<Theme> = themes
                    .into_iter()
                    .filter(|t| params.status.matches(&t.status))
                    .collect();
                let notes = vec![format!("status: {}", params.status.as_str())];
                self.crud.render_list(&matching, &notes)
            }
            Err(e) => ResponseEnvelope::failure("list", LABEL, e),
        }
    }

    pub async fn get(&self, params: &ThemeParams) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("stylesheet", &params.stylesheet)]) {
            return ResponseEnvelope::failure("get", LABEL, reason);
        }
        self.crud.get(&params.stylesheet).await
    }

    pub async fn install(&self, params: &InstallThemeParams) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("slug", &params.slug)]) {
            return ResponseEnvelope::failure("install", LABEL, reason);
        }
        match self.crud.create_one(json!({ "slug": params.slug })).await {
            Ok(theme) => ResponseEnvelope::text(format!("Installed {LABEL}: {}", theme.summary())),
            Err(e) => ResponseEnvelope::failure("install", LABEL, e),
        }
    }

    pub async fn activate(&self, params: &ThemeParams) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("stylesheet", &params.stylesheet)]) {
            return ResponseEnvelope::failure("activate", LABEL, reason);
        }
        match self
            .crud
            .update_one(&params.stylesheet, single_change("status", "active"))
            .await
        {
            Ok(theme) => ResponseEnvelope::text(format!("Activated {LABEL}: {}", theme.summary())),
            Err(e) => ResponseEnvelope::failure("activate", LABEL, e),
        }
    }

    /// Delete a theme, naming it by its display name when it can be looked up.
    pub async fn delete(&self, params: &ThemeParams) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("stylesheet", &params.stylesheet)]) {
            return ResponseEnvelope::failure("delete", LABEL, reason);
        }
        let name = match self.crud.fetch_one(&params.stylesheet).await {
            Ok(theme) if !theme.name.rendered.is_empty() => theme.name.rendered,
            Ok(_) => params.stylesheet.clone(),
            Err(e) => {
                tracing::debug!(stylesheet = %params.stylesheet, error = %e, "theme lookup before delete failed");
                params.stylesheet.clone()
            }
        };
        match self
            .crud
            .delete_one(&params.stylesheet, QueryParams::new())
            .await
        {
            Ok(_) => ResponseEnvelope::text(format!("Deleted {LABEL}: \"{name}\"")),
            Err(e) => ResponseEnvelope::failure("delete", LABEL, e),
        }
    }
}
