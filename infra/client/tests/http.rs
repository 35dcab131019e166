//! Contract tests for `ApiClient` against a mocked backend.

use chrono::{NaiveDate, Utc};
use depot_client::{ApiClient, ClientError};
use depot_domain::config::ApiConfig;
use depot_domain::models::{Truck, TruckInput};
use depot_kernel::range::DateRange;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig { base_url: format!("{}/api", server.uri()), timeout_seconds: Some(5) })
        .unwrap()
}

fn truck_json() -> serde_json::Value {
    json!({
        "id": "t-1",
        "licensePlate": "ABC1D23",
        "model": "Atego 2426",
        "year": 2020,
        "capacityKg": 12000.5,
        "available": true,
        "createdAt": "2026-10-14T10:00:00"
    })
}

#[tokio::test]
async fn list_by_range_sends_whole_day_bounds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/truck"))
        .and(query_param("startDate", "2026-10-14T00:00:00.000Z"))
        .and(query_param("endDate", "2026-10-15T23:59:59.999Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([truck_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
    );
    let trucks: Vec<Truck> = client_for(&server).list_by_range_in("truck", &range, &Utc).await.unwrap();

    assert_eq!(trucks.len(), 1);
    assert_eq!(trucks[0].license_plate, "ABC1D23");
}

#[tokio::test]
async fn post_sends_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/truck"))
        .and(body_json(json!({
            "licensePlate": "ABC1D23",
            "model": "Atego 2426",
            "year": 2020,
            "capacityKg": 12000.5
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(truck_json()))
        .expect(1)
        .mount(&server)
        .await;

    let input = TruckInput {
        license_plate: "ABC1D23".to_owned(),
        model: "Atego 2426".to_owned(),
        year: 2020,
        capacity_kg: 12000.5,
    };
    let created: Truck = client_for(&server).post("truck", &input).await.unwrap();
    assert_eq!(created.id, "t-1");
}

#[tokio::test]
async fn rejected_request_carries_extracted_message() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/truck/t-1"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("System.ArgumentException: Ano do veículo inválido\n   at Depot.Trucks.Update()"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .put::<_, Truck>("truck/t-1", &json!({ "model": "x", "year": 1800, "capacityKg": 1 }))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Ano do veículo inválido");
    assert!(matches!(err, ClientError::Api { .. }));
}

#[tokio::test]
async fn empty_error_body_uses_status_sentence() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/inbound-entry/e-9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).delete("inbound-entry/e-9").await.unwrap_err();
    assert_eq!(err.user_message(), "Recurso não encontrado.");
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/inbound-entry/e-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete("inbound-entry/e-1").await.unwrap();
}

#[tokio::test]
async fn put_with_query_appends_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/expedition/e-1"))
        .and(query_param("orderStatus", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let reply: serde_json::Value = client_for(&server)
        .put_with_query("expedition/e-1", &json!({}), &[("orderStatus", 2)])
        .await
        .unwrap();
    assert_eq!(reply["ok"], true);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/truck/available"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get::<Vec<Truck>>("truck/available").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { context: Some(_), .. }));
}

#[tokio::test]
async fn unreachable_server_reports_connection_message() {
    let api = ApiClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_owned(),
        timeout_seconds: Some(2),
    })
    .unwrap();

    let err = api.get::<serde_json::Value>("truck/available").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
    assert_eq!(
        err.user_message(),
        "Erro de conexão. Verifique sua conexão com a internet ou se o servidor está disponível."
    );
}
