use chrono::NaiveDate;
use depot_client::ApiClient;
use depot_domain::config::ApiConfig;
use depot_fleet::{Fleet, FleetError, TruckDraft, TruckEditDraft};
use depot_kernel::form::Field;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fleet(server: &MockServer) -> Fleet {
    let config = ApiConfig { base_url: server.uri(), timeout_seconds: Some(5) };
    Fleet::new(ApiClient::new(&config).unwrap())
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn truck_json(model: &str) -> serde_json::Value {
    json!({
        "id": "t-1",
        "licensePlate": "ABC1D23",
        "model": model,
        "year": 2020,
        "capacityKg": 12000.5,
        "available": true,
        "createdAt": "2026-10-14T10:00:00Z"
    })
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;

    let err = fleet(&server).create_at(&TruckDraft::default(), today()).await.unwrap_err();
    assert!(matches!(err, FleetError::Validation { .. }));
    assert_eq!(err.user_message(), "Placa não pode ser vazia");
}

#[tokio::test]
async fn valid_draft_is_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/truck"))
        .and(body_json(json!({
            "licensePlate": "ABC1D23",
            "model": "Atego 2426",
            "year": 2020,
            "capacityKg": 12000.5
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(truck_json("Atego 2426")))
        .expect(1)
        .mount(&server)
        .await;

    let draft = TruckDraft {
        license_plate: Field::from_input("abc1d23"),
        model: Field::from_input("Atego 2426"),
        year: Field::from_input("2020"),
        capacity: Field::from_input("12.000,50"),
    };
    let truck = fleet(&server).create_at(&draft, today()).await.unwrap();
    assert_eq!(truck.id, "t-1");
}

#[tokio::test]
async fn backend_rejection_surfaces_its_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/truck/t-1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "message": "Placa já cadastrada" })))
        .mount(&server)
        .await;

    let draft = TruckEditDraft {
        model: Field::from_input("Atego"),
        year: Field::from_input("2020"),
        capacity: Field::from_input("100"),
    };
    let err = fleet(&server).update_at("t-1", &draft, today()).await.unwrap_err();
    assert!(matches!(err, FleetError::Client { context: Some(_), .. }));
    assert_eq!(err.user_message(), "Placa já cadastrada");
}

#[tokio::test]
async fn available_trucks_are_listed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/truck/available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "t-1", "licensePlate": "ABC1D23", "model": "Atego", "modelYear": 2020, "available": true }
        ])))
        .mount(&server)
        .await;

    let trucks = fleet(&server).available().await.unwrap();
    assert_eq!(trucks.len(), 1);
    assert_eq!(trucks[0].model_year, 2020);
}
