//! Entity operation handlers.
//!
//! Each service owns the conventions of one WordPress area and turns tool
//! parameters into adapter calls and [`envelope::ResponseEnvelope`]s.

pub mod bulk;
pub mod content;
pub mod crud;
pub mod envelope;
pub mod media;
pub mod plugin;
pub mod settings;
pub mod taxonomy;
pub mod theme;
pub mod user;

pub use content::ContentService;
pub use media::MediaService;
pub use plugin::PluginService;
pub use settings::SettingsService;
pub use taxonomy::TaxonomyService;
pub use theme::ThemeService;
pub use user::UserService;
