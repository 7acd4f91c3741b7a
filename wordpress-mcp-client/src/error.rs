use serde::{Deserialize, Serialize};

/// Unified error type for every call made against the WordPress REST API.
///
/// All variants carry plain strings so errors can be cloned, stored in bulk
/// outcomes and serialized for structured reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The remote API answered with a non-2xx status.
    ///
    /// `body` is read best-effort and stays empty when it could not be read.
    #[error("{}", render_http(.status, .status_text, .path, .body))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status (`Not Found`, ...).
        status_text: String,
        /// Path of the requested URL (without query string).
        path: String,
        /// Raw response body text.
        body: String,
    },

    /// A network-level error occurred (DNS resolution, connection refused, TLS, ...).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body was not the JSON shape the caller expected.
    #[error("Failed to parse response from {endpoint}: {detail}")]
    Parse {
        /// Endpoint the response came from.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body or parameter set could not be serialized.
    #[error("Failed to serialize request: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// A typed result was expected but the remote returned no content.
    #[error("Empty response from {endpoint}")]
    EmptyResponse {
        /// Endpoint that returned no content.
        endpoint: String,
    },

    /// A local file needed for the request could not be read.
    #[error("Failed to read {path}: {detail}")]
    Io {
        /// Local path.
        path: String,
        /// Error details.
        detail: String,
    },
}

fn render_http(status: &u16, status_text: &str, path: &str, body: &str) -> String {
    let mut message = format!("WP API Error: {status} {status_text} for {path}.");
    if !body.is_empty() {
        message.push(' ');
        message.push_str(body);
    }
    message
}

impl ApiError {
    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Whether the failure is routine (caller input, missing resource, permissions).
    ///
    /// Returns `true` when the error should be logged at `warn` instead of `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Http { status, .. } => (400..500).contains(status),
            Self::Io { .. } => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout {
                detail: e.to_string(),
            }
        } else {
            Self::Network {
                detail: e.to_string(),
            }
        }
    }
}

/// Result alias used across the client crate.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(body: &str) -> ApiError {
        ApiError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
            path: "/wp-json/wp/v2/posts/9".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn http_error_includes_status_and_body() {
        let msg = not_found("Not Found").to_string();
        assert_eq!(
            msg,
            "WP API Error: 404 Not Found for /wp-json/wp/v2/posts/9. Not Found"
        );
    }

    #[test]
    fn http_error_omits_empty_body() {
        let msg = not_found("").to_string();
        assert_eq!(msg, "WP API Error: 404 Not Found for /wp-json/wp/v2/posts/9.");
    }

    #[test]
    fn classification_helpers() {
        let err = not_found("");
        assert!(err.is_not_found());
        assert!(err.is_expected());
        assert!(!err.is_auth_error());

        let err = ApiError::Http {
            status: 401,
            status_text: "Unauthorized".to_string(),
            path: "/wp-json/wp/v2/users/me".to_string(),
            body: String::new(),
        };
        assert!(err.is_auth_error());

        let err = ApiError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(not_found("x")).unwrap();
        assert_eq!(json["code"], "Http");
        assert_eq!(json["status"], 404);
    }

    #[test]
    fn io_error_is_expected_and_tagged() {
        let err = ApiError::Io {
            path: "/tmp/missing.png".to_string(),
            detail: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read /tmp/missing.png: No such file or directory"
        );
        assert!(err.is_expected());

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "Io");
        assert_eq!(json["path"], "/tmp/missing.png");
        let back: ApiError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }
}
