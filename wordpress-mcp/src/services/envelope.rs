//! Uniform tool output: ordered text blocks plus an error flag.
//!
//! Every builder here is pure. Handlers build an envelope on every path and
//! convert it into a `CallToolResult` at the protocol boundary.

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub blocks: Vec<String>,
    pub is_error: bool,
}

impl ResponseEnvelope {
    pub fn success(blocks: Vec<String>) -> Self {
        Self {
            blocks,
            is_error: false,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::success(vec![text.into()])
    }

    pub fn error(blocks: Vec<String>) -> Self {
        Self {
            blocks,
            is_error: true,
        }
    }

    /// `Failed to <action> <entity>: <cause>`.
    ///
    /// Used for remote failures and local validation failures alike.
    pub fn failure(action: &str, entity: &str, cause: impl Display) -> Self {
        Self::error(vec![format!("Failed to {action} {entity}: {cause}")])
    }

    /// Successful read that matched nothing.
    pub fn nothing_found(entity: &str) -> Self {
        Self::text(format!("No {entity} found matching the criteria."))
    }

    /// Field-by-field view of one item.
    pub fn item(entity: &str, fields: Vec<String>) -> Self {
        let mut blocks = Vec::with_capacity(fields.len() + 1);
        blocks.push(format!("{entity} details:"));
        blocks.extend(fields);
        Self::success(blocks)
    }

    /// One block per item after a header; empty lists become [`Self::nothing_found`].
    pub fn list(entity: &str, items: Vec<String>, notes: &[String]) -> Self {
        if items.is_empty() {
            return Self::nothing_found(entity);
        }
        let mut header = format!("Found {} {entity} item(s)", items.len());
        if !notes.is_empty() {
            header.push_str(&format!(" ({})", notes.join("; ")));
        }
        header.push(':');

        let mut blocks = Vec::with_capacity(items.len() + 1);
        blocks.push(header);
        blocks.extend(items);
        Self::success(blocks)
    }

    /// All blocks joined by newlines.
    #[cfg(test)]
    pub fn joined(&self) -> String {
        self.blocks.join("\n")
    }
}

impl From<ResponseEnvelope> for CallToolResult {
    fn from(envelope: ResponseEnvelope) -> Self {
        let content = envelope.blocks.into_iter().map(Content::text).collect();
        if envelope.is_error {
            Self::error(content)
        } else {
            Self::success(content)
        }
    }
}
