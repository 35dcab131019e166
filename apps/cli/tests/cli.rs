use clap::Parser;
use depot::domain::config::DashboardConfig;
use depot_cli::args::{Cli, Command, Entity, FormatKind};
use depot_cli::run;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn list_accepts_both_date_spellings() {
    let cli = Cli::try_parse_from(["depot", "list", "trucks", "--start", "01/10/2026", "--end", "2026-10-15"])
        .unwrap();
    let Command::List { entity, start, end } = cli.command else { panic!("expected list") };
    assert_eq!(entity, Entity::Trucks);
    assert_eq!(start.unwrap().to_string(), "2026-10-01");
    assert_eq!(end.unwrap().to_string(), "2026-10-15");
}

#[test]
fn bad_date_is_a_usage_error() {
    assert!(Cli::try_parse_from(["depot", "list", "orders", "--start", "yesterday"]).is_err());
}

#[test]
fn global_config_flag() {
    let cli = Cli::try_parse_from(["depot", "category", "3", "--config", "conf/dev"]).unwrap();
    assert_eq!(cli.config.unwrap().to_str(), Some("conf/dev"));
}

#[tokio::test]
async fn format_and_category_print_one_line() {
    let out = run(
        Command::Format { kind: FormatKind::Phone, value: "11987654321".to_owned() },
        DashboardConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(out, ["(11) 98765-4321"]);

    let out = run(
        Command::Format { kind: FormatKind::Price, value: "123456".to_owned() },
        DashboardConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(out, ["1.234,56"]);

    let out = run(Command::Category { mask: 0 }, DashboardConfig::default()).await.unwrap();
    assert_eq!(out, ["Nenhuma"]);
    let out = run(Command::Category { mask: 21 }, DashboardConfig::default()).await.unwrap();
    assert_eq!(out, ["A, C, E"]);
}

#[tokio::test]
async fn list_renders_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/driver"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "d-1",
            "name": "Maria Souza",
            "phone": "11987654321",
            "cnh": "12345678901",
            "cnhCategory": 3,
            "active": true,
            "createdAt": "2026-10-14T10:00:00"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = DashboardConfig::default();
    config.api.base_url = server.uri();

    let command = Command::List {
        entity: Entity::Drivers,
        start: chrono::NaiveDate::from_ymd_opt(2026, 10, 1),
        end: chrono::NaiveDate::from_ymd_opt(2026, 10, 15),
    };
    let rows = run(command, config).await.unwrap();
    assert_eq!(rows, ["Maria Souza\t(11) 98765-4321\tCNH 12345678901\tA, B\tAtivo"]);
}

#[tokio::test]
async fn inverted_range_is_refused_before_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let mut config = DashboardConfig::default();
    config.api.base_url = server.uri();

    let command = Command::List {
        entity: Entity::Orders,
        start: chrono::NaiveDate::from_ymd_opt(2026, 10, 15),
        end: chrono::NaiveDate::from_ymd_opt(2026, 10, 1),
    };
    let err = run(command, config).await.unwrap_err();
    assert_eq!(err.to_string(), "A data inicial não pode ser maior que a data final");
}

#[tokio::test]
async fn backend_errors_read_as_user_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut config = DashboardConfig::default();
    config.api.base_url = server.uri();

    let command = Command::List {
        entity: Entity::Orders,
        start: chrono::NaiveDate::from_ymd_opt(2026, 10, 1),
        end: chrono::NaiveDate::from_ymd_opt(2026, 10, 2),
    };
    let err = run(command, config).await.unwrap_err();
    assert_eq!(err.to_string(), "Erro interno do servidor. Por favor, tente novamente mais tarde.");
}
