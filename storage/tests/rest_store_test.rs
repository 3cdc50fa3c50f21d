use brain_core::{ItemId, ItemStatus, ItemStore, ItemType, NewItem, QuickKind};
use config::StoreConfig;
use errors::StoreError;
use serde_json::json;
use storage::RestItemStore;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "anon-test-key";

fn store_for(server: &MockServer) -> RestItemStore {
    let config = StoreConfig {
        url: Some(server.uri()),
        api_key: Some(API_KEY.to_string()),
        ..Default::default()
    };
    RestItemStore::new(&config).unwrap()
}

fn row(id: i64, title: &str, item_type: &str, status: &str, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "content": null,
        "type": item_type,
        "status": status,
        "created_at": created_at
    })
}

#[tokio::test]
async fn test_insert_posts_row_and_returns_representation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/items"))
        .and(header("apikey", API_KEY))
        .and(header("Authorization", &format!("Bearer {}", API_KEY)))
        .and(header("Prefer", "return=representation"))
        .and(body_json(json!([
            {"title": "Call Bob", "type": "todo", "status": "inbox"}
        ])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([row(
            7,
            "Call Bob",
            "todo",
            "inbox",
            "2025-03-01T09:30:00.123456+00:00",
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = store_for(&server)
        .insert(NewItem::quick("Call Bob", QuickKind::Todo))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, ItemId::new(7));
    assert_eq!(rows[0].item_type, ItemType::Todo);
}

#[tokio::test]
async fn test_capture_insert_sends_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/items"))
        .and(body_json(json!([{
            "title": "Note rapide",
            "content": "https://example.com",
            "type": "inbox",
            "status": "inbox"
        }])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 1,
            "title": "Note rapide",
            "content": "https://example.com",
            "type": "inbox",
            "status": "inbox",
            "created_at": "2025-03-01T09:30:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let request = brain_core::CaptureRequest {
        url: Some("https://example.com".to_string()),
        ..Default::default()
    };
    let rows = store_for(&server)
        .insert(NewItem::from_capture(&request))
        .await
        .unwrap();
    assert_eq!(rows[0].content.as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn test_list_recent_orders_by_created_at_desc() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .and(query_param("select", "*"))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            row(2, "newer", "note", "inbox", "2025-03-02T00:00:00Z"),
            row(1, "older", "todo", "archived", "2025-03-01T00:00:00Z"),
        ])))
        .mount(&server)
        .await;

    let items = store_for(&server).list_recent().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "newer");
    assert_eq!(items[1].status, ItemStatus::Archived);
}

#[tokio::test]
async fn test_list_recent_defaults_null_columns() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            row(3, "Call Bob", "todo", "inbox", "2025-03-03T00:00:00Z"),
            {
                "id": 2,
                "title": null,
                "content": null,
                "type": null,
                "status": null,
                "created_at": "2025-03-02T00:00:00Z"
            },
            row(1, "Garden idea", "idea", "inbox", "2025-03-01T00:00:00Z")
        ])))
        .mount(&server)
        .await;

    let items = store_for(&server).list_recent().await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].item_type, ItemType::Todo);
    assert_eq!(items[1].title, "");
    assert_eq!(items[1].item_type, ItemType::Inbox);
    assert_eq!(items[1].status, ItemStatus::Inbox);
    assert_eq!(items[2].item_type, ItemType::Idea);
}

#[tokio::test]
async fn test_archive_patches_status_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/items"))
        .and(query_param("id", "eq.42"))
        .and(header("Prefer", "return=minimal"))
        .and(body_json(json!({"status": "archived"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.archive(ItemId::new(42)).await.unwrap();
    store.archive(ItemId::new(42)).await.unwrap();
}

#[tokio::test]
async fn test_api_error_carries_store_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/items"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "23502",
            "details": null,
            "hint": null,
            "message": "null value in column \"title\" violates not-null constraint"
        })))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .insert(NewItem::quick("x", QuickKind::Note))
        .await
        .unwrap_err();

    match err {
        StoreError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(
                message,
                "null value in column \"title\" violates not-null constraint",
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_without_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = store_for(&server).list_recent().await.unwrap_err();
    assert_eq!(err.store_message(), "Service Unavailable");
}

#[tokio::test]
async fn test_malformed_rows_are_serialization_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
        .mount(&server)
        .await;

    let err = store_for(&server).list_recent().await.unwrap_err();
    assert!(matches!(err, StoreError::Serialization { .. }));
}

#[tokio::test]
async fn test_unreachable_store_is_connection_error() {
    let config = StoreConfig {
        url: Some("http://127.0.0.1:1".to_string()),
        api_key: Some(API_KEY.to_string()),
        timeout_seconds: 2,
        ..Default::default()
    };
    let store = RestItemStore::new(&config).unwrap();

    let err = store.list_recent().await.unwrap_err();
    assert!(matches!(err, StoreError::Connection { .. }));
}
