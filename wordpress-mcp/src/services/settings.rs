use std::sync::Arc;

use wordpress_mcp_client::types::{SiteSettings, decode};
use wordpress_mcp_client::{QueryParams, RequestOptions, WpApi};

use super::crud::defined_fields;
use super::envelope::ResponseEnvelope;
use crate::schemas::settings::UpdateSettingsParams;

const SETTINGS_ENDPOINT: &str = "/wp/v2/settings";
const LABEL: &str = "settings";

fn push_field(fields: &mut Vec<String>, name: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        fields.push(format!("{name}: {}", value.to_string()));
    }
}

fn describe(settings: &SiteSettings) -> Vec<String> {
    let s = settings;
    let mut fields = Vec::new();
    push_field(&mut fields, "Site title", s.title.as_ref());
    push_field(&mut fields, "Tagline", s.description.as_ref());
    push_field(&mut fields, "Site URL", s.url.as_ref());
    push_field(&mut fields, "Admin email", s.email.as_ref());
    push_field(&mut fields, "Timezone", s.timezone.as_ref());
    push_field(&mut fields, "Date format", s.date_format.as_ref());
    push_field(&mut fields, "Time format", s.time_format.as_ref());
    push_field(&mut fields, "Week starts on", s.start_of_week);
    push_field(&mut fields, "Language", s.language.as_ref());
    push_field(&mut fields, "Front page shows", s.show_on_front.as_ref());
    push_field(&mut fields, "Static front page", s.page_on_front);
    push_field(&mut fields, "Posts page", s.page_for_posts);
    push_field(&mut fields, "Posts per page", s.posts_per_page);
    push_field(&mut fields, "Default comment status", s.default_comment_status.as_ref());
    push_field(&mut fields, "Default ping status", s.default_ping_status.as_ref());
    push_field(&mut fields, "Default category", s.default_category);
    push_field(&mut fields, "Default post format", s.default_post_format.as_ref());
    fields
}

pub struct SettingsService {
    api: Arc<dyn WpApi>,
}

impl SettingsService {
    pub fn new(api: Arc<dyn WpApi>) -> Self {
        Self { api }
    }

    pub async fn get(&self) -> ResponseEnvelope {
        match self
            .api
            .call(SETTINGS_ENDPOINT, RequestOptions::get())
            .await
            .and_then(|body| decode::<SiteSettings>(SETTINGS_ENDPOINT, body))
        {
            Ok(settings) => ResponseEnvelope::item("Site settings", describe(&settings)),
            Err(e) => ResponseEnvelope::failure("get", LABEL, e),
        }
    }

    /// Send only the provided settings; an empty update fails locally.
    pub async fn update(&self, params: &UpdateSettingsParams) -> ResponseEnvelope {
        let changes = match defined_fields(params) {
            Ok(changes) if changes.is_empty() => {
                return ResponseEnvelope::failure(
                    "update",
                    LABEL,
                    "provide at least one setting to update",
                );
            }
            Ok(changes) => changes,
            Err(e) => return ResponseEnvelope::failure("update", LABEL, e),
        };

        let updated: Vec<String> = QueryParams::normalize(&changes)
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        match self
            .api
            .call(
                SETTINGS_ENDPOINT,
                RequestOptions::post(serde_json::Value::Object(changes)),
            )
            .await
        {
            Ok(_) => {
                let mut blocks = vec![format!("Updated {} setting(s):", updated.len())];
                blocks.extend(updated);
                ResponseEnvelope::success(blocks)
            }
            Err(e) => ResponseEnvelope::failure("update", LABEL, e),
        }
    }
}
