//! MCP server exposing the WordPress REST API as tools.
//!
//! Every tool deserializes its parameters, delegates to one service and
//! converts the resulting envelope. Tool failures are reported in-band with
//! `isError`, never as protocol errors.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use wordpress_mcp_client::WpApi;

use crate::schemas::content::{
    BulkCreateContentParams, BulkDeleteContentParams, CreateContentParams, DeleteContentParams,
    GetContentParams, ListContentParams, ListContentTypesParams, QueryContentParams,
    UpdateContentParams,
};
use crate::schemas::media::{
    CreateMediaParams, DeleteMediaParams, EditMediaMetadataParams, GetMediaParams,
    ListMediaParams, UpdateMediaParams,
};
use crate::schemas::plugin::{InstallPluginParams, ListPluginsParams, PluginParams};
use crate::schemas::settings::{GetSettingsParams, UpdateSettingsParams};
use crate::schemas::taxonomy::{
    BulkCreateTermsParams, BulkDeleteTermsParams, CreateTermParams, DeleteTermParams,
    GetTermBySlugParams, GetTermParams, ListTaxonomiesParams, ListTermsParams, QueryTermsParams,
    UpdateTermParams,
};
use crate::schemas::theme::{InstallThemeParams, ListThemesParams, ThemeParams};
use crate::schemas::user::{
    CreateUserParams, DeleteUserParams, GetUserParams, ListUsersParams, UpdateUserParams,
};
use crate::services::{
    ContentService, MediaService, PluginService, SettingsService, TaxonomyService, ThemeService,
    UserService,
};

/// Number of tools registered by [`WordPressMcp`].
pub const TOOL_COUNT: usize = 43;

/// MCP server for one WordPress site.
#[derive(Clone)]
pub struct WordPressMcp {
    content: Arc<ContentService>,
    taxonomy: Arc<TaxonomyService>,
    media: Arc<MediaService>,
    user: Arc<UserService>,
    plugin: Arc<PluginService>,
    theme: Arc<ThemeService>,
    settings: Arc<SettingsService>,
    /// Tool router generated by macro.
    tool_router: ToolRouter<Self>,
}

impl WordPressMcp {
    /// Create a server whose tools all go through `api`.
    #[must_use]
    pub fn new(api: Arc<dyn WpApi>) -> Self {
        Self {
            content: Arc::new(ContentService::new(Arc::clone(&api))),
            taxonomy: Arc::new(TaxonomyService::new(Arc::clone(&api))),
            media: Arc::new(MediaService::new(Arc::clone(&api))),
            user: Arc::new(UserService::new(Arc::clone(&api))),
            plugin: Arc::new(PluginService::new(Arc::clone(&api))),
            theme: Arc::new(ThemeService::new(Arc::clone(&api))),
            settings: Arc::new(SettingsService::new(api)),
            tool_router: Self::content_router()
                + Self::taxonomy_router()
                + Self::media_router()
                + Self::user_router()
                + Self::plugin_router()
                + Self::theme_router()
                + Self::settings_router(),
        }
    }
}

#[tool_router(router = content_router)]
impl WordPressMcp {
    #[tool(
        name = "list-content-types",
        description = "List the content types registered on the site (posts, pages, custom post types) with their REST endpoints"
    )]
    async fn list_content_types(
        &self,
        _params: Parameters<ListContentTypesParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.list_types().await.into())
    }

    #[tool(
        name = "list-content",
        description = "List items of any content type with pagination, status, search and ordering"
    )]
    async fn list_content(
        &self,
        Parameters(params): Parameters<ListContentParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.list(&params).await.into())
    }

    #[tool(
        name = "query-content",
        description = "Query content with advanced filters: date range, authors, categories, tags, include/exclude IDs, sticky, slug"
    )]
    async fn query_content(
        &self,
        Parameters(params): Parameters<QueryContentParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.query(&params).await.into())
    }

    #[tool(name = "get-content-by-id", description = "Get one content item by ID")]
    async fn get_content_by_id(
        &self,
        Parameters(params): Parameters<GetContentParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.get(&params).await.into())
    }

    #[tool(name = "create-content", description = "Create a content item")]
    async fn create_content(
        &self,
        Parameters(params): Parameters<CreateContentParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.create(&params).await.into())
    }

    #[tool(
        name = "update-content",
        description = "Update the title, content or status of a content item; only provided fields are sent"
    )]
    async fn update_content(
        &self,
        Parameters(params): Parameters<UpdateContentParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.update(&params).await.into())
    }

    #[tool(
        name = "delete-content-by-id",
        description = "Delete a content item; moves it to the trash unless force is true"
    )]
    async fn delete_content_by_id(
        &self,
        Parameters(params): Parameters<DeleteContentParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.delete(&params).await.into())
    }

    #[tool(
        name = "bulk-create-content",
        description = "Create several content items in order and report each success and failure"
    )]
    async fn bulk_create_content(
        &self,
        Parameters(params): Parameters<BulkCreateContentParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.bulk_create(params).await.into())
    }

    #[tool(
        name = "bulk-delete-content",
        description = "Delete several content items by ID in order and report each success and failure"
    )]
    async fn bulk_delete_content(
        &self,
        Parameters(params): Parameters<BulkDeleteContentParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.content.bulk_delete(&params).await.into())
    }
}

#[tool_router(router = taxonomy_router)]
impl WordPressMcp {
    #[tool(
        name = "list-taxonomies",
        description = "List the taxonomies registered on the site (categories, tags, custom taxonomies) with their REST endpoints"
    )]
    async fn list_taxonomies(
        &self,
        _params: Parameters<ListTaxonomiesParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.list_taxonomies().await.into())
    }

    #[tool(
        name = "list-terms",
        description = "List terms of any taxonomy with pagination, search, parent and post filters"
    )]
    async fn list_terms(
        &self,
        Parameters(params): Parameters<ListTermsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.list(&params).await.into())
    }

    #[tool(
        name = "query-terms",
        description = "Query terms with advanced filters: include/exclude IDs and term meta comparisons"
    )]
    async fn query_terms(
        &self,
        Parameters(params): Parameters<QueryTermsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.query(&params).await.into())
    }

    #[tool(name = "get-term-by-id", description = "Get one taxonomy term by ID")]
    async fn get_term_by_id(
        &self,
        Parameters(params): Parameters<GetTermParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.get(&params).await.into())
    }

    #[tool(name = "get-term-by-slug", description = "Get one taxonomy term by slug")]
    async fn get_term_by_slug(
        &self,
        Parameters(params): Parameters<GetTermBySlugParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.get_by_slug(&params).await.into())
    }

    #[tool(name = "create-term", description = "Create a taxonomy term")]
    async fn create_term(
        &self,
        Parameters(params): Parameters<CreateTermParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.create(&params).await.into())
    }

    #[tool(
        name = "update-term",
        description = "Update a taxonomy term; only provided fields are sent"
    )]
    async fn update_term(
        &self,
        Parameters(params): Parameters<UpdateTermParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.update(&params).await.into())
    }

    #[tool(
        name = "delete-term",
        description = "Delete a taxonomy term; terms are always deleted permanently"
    )]
    async fn delete_term(
        &self,
        Parameters(params): Parameters<DeleteTermParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.delete(&params).await.into())
    }

    #[tool(
        name = "bulk-create-terms",
        description = "Create several taxonomy terms in order and report each success and failure"
    )]
    async fn bulk_create_terms(
        &self,
        Parameters(params): Parameters<BulkCreateTermsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.bulk_create(params).await.into())
    }

    #[tool(
        name = "bulk-delete-terms",
        description = "Delete several taxonomy terms by ID in order and report each success and failure"
    )]
    async fn bulk_delete_terms(
        &self,
        Parameters(params): Parameters<BulkDeleteTermsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.taxonomy.bulk_delete(&params).await.into())
    }
}

#[tool_router(router = media_router)]
impl WordPressMcp {
    #[tool(
        name = "list-media",
        description = "List media library items with pagination, search and media type filter"
    )]
    async fn list_media(
        &self,
        Parameters(params): Parameters<ListMediaParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.media.list(&params).await.into())
    }

    #[tool(name = "get-media", description = "Get one media item by ID")]
    async fn get_media(
        &self,
        Parameters(params): Parameters<GetMediaParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.media.get(&params).await.into())
    }

    #[tool(
        name = "create-media",
        description = "Upload a file to the media library from a local path or base64 data"
    )]
    async fn create_media(
        &self,
        Parameters(params): Parameters<CreateMediaParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.media.create(&params).await.into())
    }

    #[tool(
        name = "update-media",
        description = "Update a media item; only provided fields are sent"
    )]
    async fn update_media(
        &self,
        Parameters(params): Parameters<UpdateMediaParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.media.update(&params).await.into())
    }

    #[tool(
        name = "edit-media-metadata",
        description = "Edit the alt text, caption, description or title of a media item"
    )]
    async fn edit_media_metadata(
        &self,
        Parameters(params): Parameters<EditMediaMetadataParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.media.edit_metadata(&params).await.into())
    }

    #[tool(
        name = "delete-media",
        description = "Delete a media item; set force to true to delete it permanently"
    )]
    async fn delete_media(
        &self,
        Parameters(params): Parameters<DeleteMediaParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.media.delete(&params).await.into())
    }
}

#[tool_router(router = user_router)]
impl WordPressMcp {
    #[tool(
        name = "list-users",
        description = "List users with pagination, search, ordering and role filter"
    )]
    async fn list_users(
        &self,
        Parameters(params): Parameters<ListUsersParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.user.list(&params).await.into())
    }

    #[tool(name = "get-user", description = "Get one user by ID")]
    async fn get_user(
        &self,
        Parameters(params): Parameters<GetUserParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.user.get(&params).await.into())
    }

    #[tool(name = "create-user", description = "Create a user account")]
    async fn create_user(
        &self,
        Parameters(params): Parameters<CreateUserParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.user.create(&params).await.into())
    }

    #[tool(
        name = "update-user",
        description = "Update a user; only provided fields are sent"
    )]
    async fn update_user(
        &self,
        Parameters(params): Parameters<UpdateUserParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.user.update(&params).await.into())
    }

    #[tool(
        name = "delete-user",
        description = "Delete a user, optionally reassigning their content to another user"
    )]
    async fn delete_user(
        &self,
        Parameters(params): Parameters<DeleteUserParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.user.delete(&params).await.into())
    }
}

#[tool_router(router = plugin_router)]
impl WordPressMcp {
    #[tool(
        name = "list-plugins",
        description = "List installed plugins, optionally only active or inactive ones"
    )]
    async fn list_plugins(
        &self,
        Parameters(params): Parameters<ListPluginsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.plugin.list(&params).await.into())
    }

    #[tool(name = "get-plugin", description = "Get one installed plugin by its folder/file identifier")]
    async fn get_plugin(
        &self,
        Parameters(params): Parameters<PluginParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.plugin.get(&params).await.into())
    }

    #[tool(
        name = "install-plugin",
        description = "Install a plugin from the WordPress.org directory by slug"
    )]
    async fn install_plugin(
        &self,
        Parameters(params): Parameters<InstallPluginParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.plugin.install(&params).await.into())
    }

    #[tool(name = "activate-plugin", description = "Activate an installed plugin")]
    async fn activate_plugin(
        &self,
        Parameters(params): Parameters<PluginParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.plugin.activate(&params).await.into())
    }

    #[tool(name = "deactivate-plugin", description = "Deactivate an active plugin")]
    async fn deactivate_plugin(
        &self,
        Parameters(params): Parameters<PluginParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.plugin.deactivate(&params).await.into())
    }

    #[tool(
        name = "delete-plugin",
        description = "Delete an installed plugin; it must be inactive"
    )]
    async fn delete_plugin(
        &self,
        Parameters(params): Parameters<PluginParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.plugin.delete(&params).await.into())
    }
}

#[tool_router(router = theme_router)]
impl WordPressMcp {
    #[tool(
        name = "list-themes",
        description = "List installed themes, optionally only the active or inactive ones"
    )]
    async fn list_themes(
        &self,
        Parameters(params): Parameters<ListThemesParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.theme.list(&params).await.into())
    }

    #[tool(name = "get-theme", description = "Get one installed theme by stylesheet")]
    async fn get_theme(
        &self,
        Parameters(params): Parameters<ThemeParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.theme.get(&params).await.into())
    }

    #[tool(
        name = "install-theme",
        description = "Install a theme from the WordPress.org directory by slug"
    )]
    async fn install_theme(
        &self,
        Parameters(params): Parameters<InstallThemeParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.theme.install(&params).await.into())
    }

    #[tool(name = "activate-theme", description = "Make an installed theme the active theme")]
    async fn activate_theme(
        &self,
        Parameters(params): Parameters<ThemeParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.theme.activate(&params).await.into())
    }

    #[tool(
        name = "delete-theme",
        description = "Delete an installed theme; the active theme cannot be deleted"
    )]
    async fn delete_theme(
        &self,
        Parameters(params): Parameters<ThemeParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.theme.delete(&params).await.into())
    }
}

#[tool_router(router = settings_router)]
impl WordPressMcp {
    #[tool(
        name = "get-settings",
        description = "Get the general, reading and discussion settings of the site"
    )]
    async fn get_settings(
        &self,
        _params: Parameters<GetSettingsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.settings.get().await.into())
    }

    #[tool(
        name = "update-settings",
        description = "Update site settings; only provided settings are sent"
    )]
    async fn update_settings(
        &self,
        Parameters(params): Parameters<UpdateSettingsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.settings.update(&params).await.into())
    }
}

#[tool_handler]
impl ServerHandler for WordPressMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "WordPress MCP Server - Manage content, taxonomies, media, users, plugins, themes \
                 and settings of one WordPress site through its REST API. \
                 Call list-content-types to discover the `type` and `endpoint` of each content type \
                 and list-taxonomies to do the same for taxonomy terms. \
                 Bulk tools run item by item and report which items succeeded and which failed."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "server_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;

#[cfg(test)]
#[path = "client_integration_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod client_integration_tests;
