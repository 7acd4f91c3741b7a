//! User accounts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{OneOrMany, SortOrder, default_order_asc, default_page, default_per_page};

/// Minimum length accepted for a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserOrderBy {
    #[default]
    Id,
    Name,
    RegisteredDate,
    Email,
}

/// Parameters for `list-users` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListUsersParams {
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
    #[schemars(description = "Sort field (default: id)")]
    pub orderby: UserOrderBy,

    #[schemars(description = "Role or list of roles to filter by")]
    pub roles: Option<OneOrMany<String>>,
}

/// Parameters for `get-user` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetUserParams {
    #[schemars(description = "User ID")]
    pub id: u64,
}

/// Parameters for `create-user` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserParams {
    #[schemars(description = "Login name", length(min = 1))]
    pub username: String,

    #[schemars(description = "Email address", email)]
    pub email: String,

    #[schemars(description = "Password (at least 6 characters)", length(min = 6))]
    pub password: String,

    #[schemars(description = "Display name")]
    pub name: Option<String>,

    #[schemars(description = "First name")]
    pub first_name: Option<String>,

    #[schemars(description = "Last name")]
    pub last_name: Option<String>,

    #[schemars(description = "Role or list of roles")]
    pub roles: Option<OneOrMany<String>>,

    #[schemars(description = "Biographical info")]
    pub description: Option<String>,

    #[schemars(description = "Locale (e.g. en_US)")]
    pub locale: Option<String>,

    #[schemars(description = "Website URL")]
    pub url: Option<String>,

    #[schemars(description = "User meta")]
    pub meta: Option<Map<String, Value>>,
}

/// Parameters for `update-user` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserParams {
    #[serde(skip_serializing)]
    #[schemars(description = "User ID")]
    pub id: u64,

    #[schemars(description = "Login name")]
    pub username: Option<String>,

    #[schemars(description = "Email address", email)]
    pub email: Option<String>,

    #[schemars(description = "Password (at least 6 characters)", length(min = 6))]
    pub password: Option<String>,

    #[schemars(description = "Display name")]
    pub name: Option<String>,

    #[schemars(description = "First name")]
    pub first_name: Option<String>,

    #[schemars(description = "Last name")]
    pub last_name: Option<String>,

    #[schemars(description = "Role or list of roles")]
    pub roles: Option<OneOrMany<String>>,

    #[schemars(description = "Biographical info")]
    pub description: Option<String>,

    #[schemars(description = "Locale (e.g. en_US)")]
    pub locale: Option<String>,

    #[schemars(description = "Website URL")]
    pub url: Option<String>,

    #[schemars(description = "User meta")]
    pub meta: Option<Map<String, Value>>,
}

/// Parameters for `delete-user` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeleteUserParams {
    #[schemars(description = "User ID")]
    pub id: u64,

    #[serde(default)]
    #[schemars(description = "Delete permanently (required by WordPress for users, default: false)")]
    pub force: bool,

    #[schemars(description = "User ID that receives the deleted user's content")]
    pub reassign: Option<u64>,
}

/// Check the email and password rules that the schema alone cannot enforce.
pub fn validate_credentials(email: Option<&str>, password: Option<&str>) -> Result<(), String> {
    if let Some(email) = email {
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(format!("'{email}' is not a valid email address"));
        }
    }
    if let Some(password) = password {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_users_accepts_single_role() {
        let params: ListUsersParams = serde_json::from_value(json!({ "roles": "editor" })).unwrap();
        assert_eq!(params.roles, Some(OneOrMany::One("editor".to_string())));
        assert_eq!(params.orderby, UserOrderBy::Id);
    }

    #[test]
    fn credential_rules() {
        assert!(validate_credentials(Some("a@example.com"), Some("secret1")).is_ok());
        assert!(validate_credentials(None, None).is_ok());
        assert!(validate_credentials(Some("not-an-email"), None).is_err());
        assert!(validate_credentials(Some("a@localhost"), None).is_err());

        let err = validate_credentials(None, Some("12345")).unwrap_err();
        assert!(err.contains("at least 6"));
    }
}
