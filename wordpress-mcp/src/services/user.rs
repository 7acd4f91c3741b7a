use std::sync::Arc;

use wordpress_mcp_client::types::{Deleted, User, decode};
use wordpress_mcp_client::{QueryParams, WpApi};

use super::crud::{Crud, EntityConfig, Resource, defined_fields, require_non_empty};
use super::envelope::ResponseEnvelope;
use crate::schemas::user::{
    CreateUserParams, DeleteUserParams, GetUserParams, ListUsersParams, UpdateUserParams,
    validate_credentials,
};

const USERS_ENDPOINT: &str = "/wp/v2/users";
const LABEL: &str = "user";

const UPDATABLE: &[&str] = &[
    "username",
    "email",
    "password",
    "name",
    "first_name",
    "last_name",
    "roles",
    "description",
    "locale",
    "url",
    "meta",
];

impl Resource for User {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn summary(&self) -> String {
        let mut line = format!("ID: {}, Name: {}", self.id, self.name);
        if let Some(username) = &self.username {
            line.push_str(&format!(", Username: {username}"));
        }
        if let Some(email) = &self.email {
            line.push_str(&format!(", Email: {email}"));
        }
        if !self.roles.is_empty() {
            line.push_str(&format!(", Roles: {}", self.roles.join(", ")));
        }
        line
    }

    fn details(&self) -> Vec<String> {
        let mut fields = vec![format!("ID: {}", self.id), format!("Name: {}", self.name)];
        if let Some(username) = &self.username {
            fields.push(format!("Username: {username}"));
        }
        if let Some(email) = &self.email {
            fields.push(format!("Email: {email}"));
        }
        if !self.roles.is_empty() {
            fields.push(format!("Roles: {}", self.roles.join(", ")));
        }
        if let Some(registered) = &self.registered_date {
            fields.push(format!("Registered: {registered}"));
        }
        if !self.url.is_empty() {
            fields.push(format!("Website: {}", self.url));
        }
        if !self.description.is_empty() {
            fields.push(format!("Description: {}", self.description));
        }
        fields
    }
}

pub struct UserService {
    crud: Crud<User>,
}

impl UserService {
    pub fn new(api: Arc<dyn WpApi>) -> Self {
        Self {
            crud: Crud::new(api, EntityConfig::new(LABEL, USERS_ENDPOINT)),
        }
    }

    /// List one page; the header carries the totals reported by the API.
    pub async fn list(&self, params: &ListUsersParams) -> ResponseEnvelope {
        match QueryParams::from_serializable(params) {
            Ok(query) => {
                let page = format!("page {}", params.page);
                self.crud.list(query, &[page]).await
            }
            Err(e) => ResponseEnvelope::failure("list", LABEL, e),
        }
    }

    pub async fn get(&self, params: &GetUserParams) -> ResponseEnvelope {
        self.crud.get(&params.id.to_string()).await
    }

    pub async fn create(&self, params: &CreateUserParams) -> ResponseEnvelope {
        if let Err(reason) = require_non_empty(&[("username", &params.username)])
            .and_then(|()| validate_credentials(Some(&params.email), Some(&params.password)))
        {
            return ResponseEnvelope::failure("create", LABEL, reason);
        }
        match defined_fields(params) {
            Ok(body) => self.crud.create(&body).await,
            Err(e) => ResponseEnvelope::failure("create", LABEL, e),
        }
    }

    pub async fn update(&self, params: &UpdateUserParams) -> ResponseEnvelope {
        if let Err(reason) =
            validate_credentials(params.email.as_deref(), params.password.as_deref())
        {
            return ResponseEnvelope::failure("update", LABEL, reason);
        }
        match defined_fields(params) {
            Ok(changes) => {
                self.crud
                    .update(&params.id.to_string(), changes, UPDATABLE)
                    .await
            }
            Err(e) => ResponseEnvelope::failure("update", LABEL, e),
        }
    }

    /// Delete a user, optionally handing their content to `reassign`.
    pub async fn delete(&self, params: &DeleteUserParams) -> ResponseEnvelope {
        let mut query = QueryParams::new().with("force", params.force);
        if let Some(reassign) = params.reassign {
            query.insert("reassign", reassign);
        }

        let id = params.id.to_string();
        let endpoint = self.crud.config().item_endpoint(&id);
        match self.crud.delete_one(&id, query).await {
            Ok(body) => {
                let username = decode::<Deleted>(&endpoint, body)
                    .ok()
                    .and_then(|d| d.previous)
                    .and_then(|p| p.get("username").and_then(|u| u.as_str()).map(str::to_string));
                let mut text = format!("Deleted {LABEL}: ID {id}");
                if let Some(username) = username {
                    text.push_str(&format!(" (username: {username})"));
                }
                if let Some(reassign) = params.reassign {
                    text.push_str(&format!(", content reassigned to user {reassign}"));
                }
                ResponseEnvelope::text(text)
            }
            Err(e) => ResponseEnvelope::failure("delete", LABEL, e),
        }
    }
}
