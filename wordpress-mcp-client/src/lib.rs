//! # wordpress-mcp-client
//!
//! Typed access to the WordPress REST API (`/wp-json/wp/v2/...`) authenticated
//! with an application password.
//!
//! ## Layers
//!
//! - [`QueryParams`] folds heterogeneous parameter objects into flat query strings.
//! - [`WpClient`] performs the HTTP call and classifies the response.
//! - [`WpApi`] is the trait callers program against.
//! - [`types`] holds the response shapes that are actually read.
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wordpress_mcp_client::{QueryParams, RequestOptions, WpApi, WpClient, WpConfig};
//! use wordpress_mcp_client::types::{ContentItem, decode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WpClient::new(WpConfig::from_env()?)?;
//!
//!     let query = QueryParams::new().with("per_page", 5).with("status", "publish");
//!     let body = client
//!         .call("/wp/v2/posts", RequestOptions::get().with_query(query))
//!         .await?;
//!     let posts: Vec<ContentItem> = decode("/wp/v2/posts", body)?;
//!     for post in &posts {
//!         println!("{} {}", post.id, post.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod http_client;
pub mod params;
mod traits;
pub mod types;

pub use config::{ConfigError, Credentials, WpConfig};
pub use error::{ApiError, Result};
pub use http_client::{WpClient, encode_path_segment};
pub use params::QueryParams;
pub use reqwest::Method;
pub use traits::WpApi;
pub use types::{ApiResponse, FileUpload, RequestBody, RequestOptions};
