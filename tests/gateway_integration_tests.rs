use roster::core::customer::{CustomerFields, CustomerId, Gender};
use roster::gateway::{CustomerGateway, GatewayError, HttpGateway};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_fields() -> CustomerFields {
    CustomerFields {
        name: "Nguyen Van A".to_string(),
        avatar: "https://example.com/a.png".to_string(),
        email: "a@example.com".to_string(),
        phone_number: "0912345678".to_string(),
        description: "Engineer".to_string(),
        address: "Hanoi".to_string(),
        gender: Gender::Male,
    }
}

/// The JSON the server sends back for a customer record.
fn record(id: serde_json::Value, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "avatar": "https://example.com/a.png",
        "mail": "a@example.com",
        "phoneNumber": "0912345678",
        "description": "Engineer",
        "address": "Hanoi",
        "gender": "male"
    })
}

fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(&server.uri(), "customers")
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            record(json!("1"), "Ana"),
            record(json!("2"), "Bao"),
        ])))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let customers = gateway.list().await.expect("list should succeed");

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].id, CustomerId::new("1"));
    assert_eq!(customers[1].name(), "Bao");
    assert_eq!(customers[0].fields.email, "a@example.com");
    assert_eq!(customers[0].fields.phone_number, "0912345678");
}

#[tokio::test]
async fn test_list_accepts_numeric_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([record(json!(42), "Ana")])),
        )
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let customers = gateway.list().await.expect("list should succeed");
    assert_eq!(customers[0].id, CustomerId::new("42"));
}

#[tokio::test]
async fn test_list_tolerates_null_attributes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            record(json!("1"), "Ana"),
            {"id": "2", "name": "Bao", "gender": null},
            {"id": "3", "name": "Cam", "avatar": null, "phoneNumber": null},
        ])))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let customers = gateway.list().await.expect("list should succeed");

    assert_eq!(customers.len(), 3);
    assert_eq!(customers[1].fields.gender, Gender::Male);
    assert_eq!(customers[2].fields.avatar, "");
    assert_eq!(customers[2].fields.phone_number, "");
}

#[tokio::test]
async fn test_list_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    match gateway.list().await {
        Err(GatewayError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    assert!(matches!(gateway.list().await, Err(GatewayError::Parse(_))));
}

#[tokio::test]
async fn test_list_network_error() {
    // Nothing listens on port 9 on the test host
    let gateway = HttpGateway::new("http://127.0.0.1:9", "customers");
    assert!(matches!(gateway.list().await, Err(GatewayError::Network(_))));
}

// ============================================================================
// Create / Update
// ============================================================================

#[tokio::test]
async fn test_create_posts_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({
            "name": "Nguyen Van A",
            "avatar": "https://example.com/a.png",
            "mail": "a@example.com",
            "phoneNumber": "0912345678",
            "description": "Engineer",
            "address": "Hanoi",
            "gender": "male"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record(json!("9"), "Nguyen Van A")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let created = gateway
        .create(&sample_fields())
        .await
        .expect("create should succeed");

    assert_eq!(created.id, CustomerId::new("9"));
    assert_eq!(created.fields, sample_fields());
}

#[tokio::test]
async fn test_create_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(422).set_body_string("{\"error\":\"invalid\"}"))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    match gateway.create(&sample_fields()).await {
        Err(GatewayError::Api { status, .. }) => assert_eq!(status, 422),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_puts_to_item_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/customers/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record(json!("7"), "Renamed")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let mut fields = sample_fields();
    fields.name = "Renamed".to_string();
    let updated = gateway
        .update(&CustomerId::new("7"), &fields)
        .await
        .expect("update should succeed");

    assert_eq!(updated.id, CustomerId::new("7"));
    assert_eq!(updated.name(), "Renamed");
}

#[tokio::test]
async fn test_update_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/customers/7"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    match gateway.update(&CustomerId::new("7"), &sample_fields()).await {
        Err(GatewayError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_network_error() {
    let gateway = HttpGateway::new("http://127.0.0.1:9", "customers");
    assert!(matches!(
        gateway.create(&sample_fields()).await,
        Err(GatewayError::Network(_))
    ));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_returns_removed_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/customers/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record(json!("3"), "Ana")))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    let removed = gateway
        .delete(&CustomerId::new("3"))
        .await
        .expect("delete should succeed");
    assert_eq!(removed.map(|c| c.id), Some(CustomerId::new("3")));
}

#[tokio::test]
async fn test_delete_without_record_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/customers/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/customers/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    assert_eq!(gateway.delete(&CustomerId::new("3")).await, Ok(None));
    assert_eq!(gateway.delete(&CustomerId::new("4")).await, Ok(None));
}

#[tokio::test]
async fn test_delete_network_error() {
    let gateway = HttpGateway::new("http://127.0.0.1:9", "customers");
    assert!(matches!(
        gateway.delete(&CustomerId::new("3")).await,
        Err(GatewayError::Network(_))
    ));
}

#[tokio::test]
async fn test_delete_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/customers/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let gateway = gateway_for(&mock_server);
    assert_eq!(
        gateway.delete(&CustomerId::new("404")).await,
        Err(GatewayError::Api {
            status: 404,
            message: "Not Found".to_string()
        })
    );
}
