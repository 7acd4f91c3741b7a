#![allow(clippy::unwrap_used)]

mod common;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordpress_mcp_client::types::{ContentItem, decode};
use wordpress_mcp_client::{
    ApiError, FileUpload, Method, QueryParams, RequestOptions, WpApi, WpClient, WpConfig,
};

use common::{APP_PASSWORD, USERNAME, client_for};

#[tokio::test]
async fn get_sends_auth_and_normalized_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(basic_auth(USERNAME, APP_PASSWORD))
        .and(query_param("page", "1"))
        .and(query_param("tags", "3,7"))
        .and(query_param("sticky", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([
                    { "id": 1, "title": { "rendered": "First" }, "status": "publish" },
                    { "id": 2, "title": { "rendered": "Second" }, "status": "publish" }
                ]))
                .insert_header("X-WP-Total", "12")
                .insert_header("X-WP-TotalPages", "6"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = QueryParams::normalize(
        json!({ "page": 1, "tags": [3, 7], "sticky": true, "search": null })
            .as_object()
            .unwrap(),
    );

    let response = require_ok!(
        client
            .send("/wp/v2/posts", RequestOptions::get().with_query(query))
            .await
    );

    assert_eq!(response.status, 200);
    assert_eq!(response.total, Some(12));
    assert_eq!(response.total_pages, Some(6));

    let posts: Vec<ContentItem> = decode("/wp/v2/posts", response.body).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].title.rendered, "Second");

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or("").contains("search"));
}

#[tokio::test]
async fn no_content_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/wp-json/wp/v2/plugins/hello"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .call("/wp/v2/plugins/hello", RequestOptions::delete())
        .await
        .unwrap();

    assert_eq!(body, None);
}

#[tokio::test]
async fn not_found_is_classified_with_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .call("/wp/v2/posts/999", RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
            path: "/wp-json/wp/v2/posts/999".to_string(),
            body: "Not Found".to_string(),
        }
    );
    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.ends_with("Not Found"));
}

#[tokio::test]
async fn empty_error_body_is_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .call("/wp/v2/settings", RequestOptions::post(json!({ "title": "x" })))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.to_string(),
        "WP API Error: 500 Internal Server Error for /wp-json/wp/v2/settings."
    );
}

#[tokio::test]
async fn json_body_defaults_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/wp-json/wp/v2/posts/5"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "title": "Renamed" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 5, "title": { "rendered": "Renamed" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .call(
            "/wp/v2/posts/5",
            RequestOptions::json(Method::PUT, json!({ "title": "Renamed" })),
        )
        .await
        .unwrap();

    assert_eq!(body.unwrap()["id"], 5);
}

#[tokio::test]
async fn anonymous_request_has_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client_for(&server)
        .call("/wp/v2/types", RequestOptions::get().anonymous())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn upload_is_sent_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/media"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 44,
            "title": { "rendered": "logo" },
            "source_url": "https://example.com/logo.png"
        })))
        .mount(&server)
        .await;

    let upload = FileUpload {
        file_name: "logo.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
        fields: vec![("alt_text".to_string(), "Company logo".to_string())],
    };
    let body = client_for(&server)
        .call("/wp/v2/media", RequestOptions::upload(upload))
        .await
        .unwrap();
    assert_eq!(body.unwrap()["id"], 44);

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    let raw = String::from_utf8_lossy(&requests[0].body);
    assert!(raw.contains("filename=\"logo.png\""));
    assert!(raw.contains("Company logo"));
}

#[tokio::test]
async fn upload_keeps_caller_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/media"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 45 })))
        .mount(&server)
        .await;

    let upload = FileUpload {
        file_name: "notes.txt".to_string(),
        mime_type: "text/plain".to_string(),
        bytes: b"hello".to_vec(),
        fields: Vec::new(),
    };
    let mut options = RequestOptions::upload(upload);
    options.headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("multipart/form-data; boundary=caller-boundary"),
    );
    client_for(&server)
        .call("/wp/v2/media", options)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let values: Vec<_> = requests[0].headers.get_all("content-type").iter().collect();
    assert_eq!(values.len(), 1);
    assert_eq!(
        values[0].to_str().unwrap(),
        "multipart/form-data; boundary=caller-boundary"
    );
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let config = WpConfig::new("http://127.0.0.1:9", "u", "p").unwrap();
    let client = WpClient::new(config).unwrap();

    let err = client
        .call("/wp/v2/posts", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Network { .. } | ApiError::Timeout { .. }
    ));
}
