use depot_client::ApiClient;
use depot_domain::config::ApiConfig;
use depot_inventory::{
    Adjustment, InboundDraft, InboundEntries, Inventory, InventoryDraft, InventoryError,
    StockAdjustment,
};
use depot_kernel::form::Field;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig { base_url: server.uri(), timeout_seconds: Some(5) }).unwrap()
}

fn item_json(quantity: i64) -> serde_json::Value {
    json!({
        "id": "i-1",
        "productCode": "P-001",
        "description": "Parafuso",
        "quantity": quantity,
        "price": 12.5,
        "active": true,
        "createdAt": "2026-10-14T10:00:00Z"
    })
}

#[tokio::test]
async fn increase_sends_bare_number() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/inventory/increase/i-1"))
        .and(body_json(json!(5)))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json(15)))
        .expect(1)
        .mount(&server)
        .await;

    let mut adjustment = StockAdjustment::new(Adjustment::Increase);
    adjustment.amount.input("5");
    let item = Inventory::new(client(&server)).adjust("i-1", &adjustment).await.unwrap();
    assert_eq!(item.quantity, 15);
}

#[tokio::test]
async fn zero_adjustment_is_refused_locally() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let adjustment = StockAdjustment::new(Adjustment::Decrease);
    let err = Inventory::new(client(&server)).adjust("i-1", &adjustment).await.unwrap_err();
    assert!(matches!(err, InventoryError::Validation { .. }));
}

#[tokio::test]
async fn decrease_below_stock_reports_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/inventory/decrease/i-1"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("System.InvalidOperationException: Estoque insuficiente"),
        )
        .mount(&server)
        .await;

    let mut adjustment = StockAdjustment::new(Adjustment::Decrease);
    adjustment.amount.input("500");
    let err = Inventory::new(client(&server)).adjust("i-1", &adjustment).await.unwrap_err();
    assert_eq!(err.user_message(), "Estoque insuficiente");
}

#[tokio::test]
async fn inbound_entry_nests_inventory_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/inbound-entry"))
        .and(body_json(json!({
            "inventoryInput": {
                "productCode": "P-001",
                "description": "Parafuso",
                "quantity": 10,
                "price": 12.5
            },
            "reference": "NF-123",
            "supplierName": "Acme"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "e-1",
            "inventoryId": "i-1",
            "productCode": "P-001",
            "description": "Parafuso",
            "quantity": 10,
            "price": 12.5,
            "reference": "NF-123",
            "supplierName": "Acme",
            "createdAt": "2026-10-14T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = InboundDraft {
        item: InventoryDraft {
            product_code: Field::from_input("P-001"),
            description: Field::from_input("Parafuso"),
            quantity: Field::from_input("10"),
            price: Field::from_input("12,50"),
        },
        reference: Field::from_input("NF-123"),
        supplier_name: Field::from_input("Acme"),
        observation: Field::default(),
    };
    let entry = InboundEntries::new(client(&server)).create(&draft).await.unwrap();
    assert_eq!(entry.inventory_id, "i-1");
    assert_eq!(entry.observation, None);
}

#[tokio::test]
async fn inbound_delete_hits_entry_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/inbound-entry/e-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    InboundEntries::new(client(&server)).delete("e-1").await.unwrap();
}
