use super::test_mocks::*;
use super::*;

use rmcp::ServiceExt;
use rmcp::model::{CallToolRequestParams, ProtocolVersion};
use serde_json::json;
use wordpress_mcp_client::Method;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Spawn a MCP server over `api` and connect a client via in-memory duplex transport.
async fn spawn_client_server(
    api: &Arc<MockWpApi>,
) -> (
    rmcp::service::RunningService<rmcp::RoleClient, ()>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
) {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = server_with(api);

    let server_handle = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        anyhow::Ok(())
    });

    let client = ().serve(client_transport).await.unwrap();
    (client, server_handle)
}

async fn spawn_default() -> (
    rmcp::service::RunningService<rmcp::RoleClient, ()>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
) {
    spawn_client_server(&MockWpApi::new()).await
}

fn call_params(name: &str, args: &serde_json::Value) -> CallToolRequestParams {
    CallToolRequestParams {
        meta: None,
        name: name.to_string().into(),
        arguments: args.as_object().cloned(),
        task: None,
    }
}

fn extract_text(result: &CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("expected text content in result")
}

// ===========================================================================
// Scenario 1: initialize handshake
// ===========================================================================

#[tokio::test]
async fn client_connects_and_receives_server_info() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let server_info = client
        .peer_info()
        .expect("server info should be set after handshake");

    assert_eq!(server_info.protocol_version, ProtocolVersion::LATEST);
    assert!(
        server_info.capabilities.tools.is_some(),
        "server should advertise tool capability"
    );

    let instructions = server_info.instructions.as_deref().unwrap_or("");
    assert!(instructions.contains("list-content-types"));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

// ===========================================================================
// Scenario 2: tools/list
// ===========================================================================

const EXPECTED_TOOL_NAMES: &[&str] = &[
    "list-content-types",
    "list-content",
    "query-content",
    "get-content-by-id",
    "create-content",
    "update-content",
    "delete-content-by-id",
    "bulk-create-content",
    "bulk-delete-content",
    "list-taxonomies",
    "list-terms",
    "query-terms",
    "get-term-by-id",
    "get-term-by-slug",
    "create-term",
    "update-term",
    "delete-term",
    "bulk-create-terms",
    "bulk-delete-terms",
    "list-media",
    "get-media",
    "create-media",
    "update-media",
    "edit-media-metadata",
    "delete-media",
    "list-users",
    "get-user",
    "create-user",
    "update-user",
    "delete-user",
    "list-plugins",
    "get-plugin",
    "install-plugin",
    "activate-plugin",
    "deactivate-plugin",
    "delete-plugin",
    "list-themes",
    "get-theme",
    "install-theme",
    "activate-theme",
    "delete-theme",
    "get-settings",
    "update-settings",
];

/// Tools whose parameter struct is empty.
const PARAMETERLESS_TOOLS: &[&str] = &["list-content-types", "list-taxonomies", "get-settings"];

#[tokio::test]
async fn tools_list_returns_every_tool() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let tools = client.list_all_tools().await?;

    assert_eq!(EXPECTED_TOOL_NAMES.len(), TOOL_COUNT);
    assert_eq!(tools.len(), TOOL_COUNT, "expected exactly {TOOL_COUNT} tools");

    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in EXPECTED_TOOL_NAMES {
        assert!(names.contains(expected), "missing tool: {expected}");
    }

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn each_tool_has_description_and_object_schema() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let tools = client.list_all_tools().await?;

    for tool in &tools {
        assert!(
            tool.description.is_some(),
            "tool '{}' missing description",
            tool.name
        );

        assert_eq!(
            tool.input_schema.get("type").and_then(|v| v.as_str()),
            Some("object"),
            "tool '{}' input_schema type must be 'object'",
            tool.name
        );

        if !PARAMETERLESS_TOOLS.contains(&tool.name.as_ref()) {
            assert!(
                tool.input_schema.contains_key("properties"),
                "tool '{}' input_schema must have 'properties'",
                tool.name
            );
        }
    }

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn routing_fields_are_required_in_schema() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let tools = client.list_all_tools().await?;
    let required_of = |name: &str| -> Vec<String> {
        let tool = tools.iter().find(|t| t.name == name).unwrap();
        tool.input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    };

    for name in ["list-content", "get-content-by-id", "bulk-delete-content", "list-terms"] {
        let required = required_of(name);
        assert!(required.contains(&"type".to_string()), "{name} must require type");
        assert!(
            required.contains(&"endpoint".to_string()),
            "{name} must require endpoint"
        );
    }
    assert!(required_of("get-content-by-id").contains(&"id".to_string()));
    assert!(required_of("activate-plugin").contains(&"plugin".to_string()));
    assert!(required_of("delete-theme").contains(&"stylesheet".to_string()));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

// ===========================================================================
// Scenario 3: tools/call
// ===========================================================================

#[tokio::test]
async fn call_get_content_returns_details() -> anyhow::Result<()> {
    let api = MockWpApi::new();
    api.respond(
        Method::GET,
        "/wp/v2/pages/3",
        json!({ "id": 3, "title": { "rendered": "About" }, "status": "publish", "type": "page" }),
    )
    .await;
    let (client, server_handle) = spawn_client_server(&api).await;

    let result = client
        .call_tool(call_params(
            "get-content-by-id",
            &json!({ "type": "page", "endpoint": "/wp/v2/pages", "id": 3 }),
        ))
        .await?;

    assert_ne!(result.is_error, Some(true));
    assert_eq!(extract_text(&result), "page details:");
    assert!(result_text(&result).contains("Title: About"));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_bulk_delete_reports_partial_success() -> anyhow::Result<()> {
    let api = MockWpApi::new();
    api.respond(Method::DELETE, "/wp/v2/posts/1", json!({ "id": 1 }))
        .await;
    api.respond(Method::DELETE, "/wp/v2/posts/3", json!({ "id": 3 }))
        .await;
    let (client, server_handle) = spawn_client_server(&api).await;

    let result = client
        .call_tool(call_params(
            "bulk-delete-content",
            &json!({ "type": "post", "endpoint": "/wp/v2/posts", "ids": [1, 2, 3] }),
        ))
        .await?;

    assert_ne!(result.is_error, Some(true));
    let text = result_text(&result);
    assert!(text.contains("2/3 succeeded"));
    assert!(text.contains("- ID 2: WP API Error: 404 Not Found"));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

// ===========================================================================
// Scenario 4: error handling
// ===========================================================================

#[tokio::test]
async fn call_remote_failure_sets_is_error() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let result = client
        .call_tool(call_params("get-user", &json!({ "id": 77 })))
        .await?;

    assert_eq!(result.is_error, Some(true));
    assert!(extract_text(&result).starts_with("Failed to get user: WP API Error: 404"));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_nonexistent_tool_returns_error() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let result = client
        .call_tool(call_params("nonexistent-tool", &json!({})))
        .await;

    assert!(result.is_err(), "calling nonexistent tool should fail");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_with_missing_routing_fields_returns_error() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let result = client
        .call_tool(call_params("list-content", &json!({ "type": "post" })))
        .await;

    assert!(result.is_err(), "missing endpoint should fail");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn call_with_unknown_field_returns_error() -> anyhow::Result<()> {
    let (client, server_handle) = spawn_default().await;

    let result = client
        .call_tool(call_params("get-plugin", &json!({ "plugin": "a/b", "extra": 1 })))
        .await;

    assert!(result.is_err(), "unknown fields should fail deserialization");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
