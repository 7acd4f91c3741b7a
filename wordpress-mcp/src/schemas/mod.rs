//! MCP tool parameter schemas
//!
//! Defines the input parameter structures for all MCP tools, one module per
//! entity kind. Every struct rejects unknown fields and carries its defaults,
//! so a successfully deserialized value is a complete, validated request.
//!
//! Structs also derive `Serialize`: the fields that are sent to the remote API
//! serialize as-is, routing fields (`type`, `endpoint`, `id`) are skipped, and
//! absent optional fields serialize as `null` and are dropped before sending.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod content;
pub mod media;
pub mod plugin;
pub mod settings;
pub mod taxonomy;
pub mod theme;
pub mod user;

/// A single value or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Local filter applied to plugin and theme listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivationFilter {
    Active,
    Inactive,
    #[default]
    All,
}

impl ActivationFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::All => "all",
        }
    }

    /// Whether a remote `status` value passes this filter.
    pub fn matches(self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == "active",
            Self::Inactive => status != "active",
        }
    }
}

pub(crate) const fn default_page() -> u32 {
    1
}

pub(crate) const fn default_per_page() -> u32 {
    10
}

pub(crate) const fn default_order_asc() -> SortOrder {
    SortOrder::Asc
}

pub(crate) const fn default_order_desc() -> SortOrder {
    SortOrder::Desc
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_or_many_accepts_both_shapes() {
        let one: OneOrMany<u64> = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(one, OneOrMany::One(3));

        let many: OneOrMany<u64> = serde_json::from_value(json!([3, 7])).unwrap();
        assert_eq!(serde_json::to_value(&many).unwrap(), json!([3, 7]));
    }

    #[test]
    fn activation_filter_matches_status() {
        assert!(ActivationFilter::All.matches("inactive"));
        assert!(ActivationFilter::Active.matches("active"));
        assert!(!ActivationFilter::Active.matches("inactive"));
        assert!(ActivationFilter::Inactive.matches("parent"));
    }
}
