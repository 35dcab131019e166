use depot_client::ApiClient;
use depot_domain::LicenseCategory;
use depot_domain::config::ApiConfig;
use depot_drivers::{DriverDraft, Drivers, DriversError};
use depot_kernel::form::Field;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn drivers(server: &MockServer) -> Drivers {
    let config = ApiConfig { base_url: server.uri(), timeout_seconds: Some(5) };
    Drivers::new(ApiClient::new(&config).unwrap())
}

fn driver_json(active: bool) -> serde_json::Value {
    json!({
        "id": "d-1",
        "name": "Maria Souza",
        "phone": "11987654321",
        "cnh": "12345678901",
        "cnhCategory": 12,
        "active": active,
        "createdAt": "2026-10-14T10:00:00"
    })
}

#[tokio::test]
async fn create_posts_category_mask() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/driver"))
        .and(body_json(json!({
            "name": "Maria Souza",
            "phone": "11987654321",
            "cnh": "12345678901",
            "cnhCategory": 8
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(driver_json(true)))
        .expect(1)
        .mount(&server)
        .await;

    let mut draft = DriverDraft {
        name: Field::from_input("Maria Souza"),
        phone: Field::from_input("(11) 98765-4321"),
        cnh: Field::from_input("12345678901"),
        ..DriverDraft::default()
    };
    draft.select_category(LicenseCategory::C.flag().bits());
    draft.select_category(LicenseCategory::D.flag().bits());

    let driver = drivers(&server).create(&draft).await.unwrap();
    assert_eq!(driver.cnh_category.label(), "C, D");
    assert_eq!(draft.category_label(), "D");
}

#[tokio::test]
async fn missing_category_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;

    let draft = DriverDraft {
        name: Field::from_input("Maria"),
        phone: Field::from_input("11987654321"),
        cnh: Field::from_input("12345678901"),
        ..DriverDraft::default()
    };
    let err = drivers(&server).create(&draft).await.unwrap_err();
    assert!(matches!(err, DriversError::Validation { .. }));
    assert_eq!(err.user_message(), "Categoria de CNH inválida");
}

#[tokio::test]
async fn toggle_status_patches_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/driver/toggle-status/d-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(driver_json(false)))
        .expect(1)
        .mount(&server)
        .await;

    let driver = drivers(&server).toggle_status("d-1").await.unwrap();
    assert!(!driver.active);
}
