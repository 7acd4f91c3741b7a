//! Shared helpers for HTTP-level tests.

#![allow(dead_code)]

use wiremock::MockServer;
use wordpress_mcp_client::{WpClient, WpConfig};

pub const USERNAME: &str = "editor";
pub const APP_PASSWORD: &str = "abcd efgh ijkl";

/// Client pointing at a running mock server.
pub fn client_for(server: &MockServer) -> WpClient {
    let config = WpConfig::new(&server.uri(), USERNAME, APP_PASSWORD).unwrap();
    WpClient::new(config).unwrap()
}

/// Assert `Result` is `Ok` and unwrap it with a readable message.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            unreachable!();
        };
        val
    }};
}
