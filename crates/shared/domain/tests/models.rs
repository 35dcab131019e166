use chrono::{TimeZone, Utc};
use depot_domain::models::{
    Driver, Expedition, ExpeditionStats, ExpeditionUpdate, InboundEntryInput, InventoryInput, Order,
    Record,
};
use depot_domain::{LicenseCategory, OrderStatus};
use serde_json::json;

#[test]
fn driver_reads_category_mask() {
    let driver: Driver = serde_json::from_value(json!({
        "id": "d-1",
        "name": "Maria Souza",
        "phone": "11987654321",
        "cnh": "12345678901",
        "cnhCategory": 6,
        "active": true,
        "createdAt": "2026-10-14T08:00:00"
    }))
    .unwrap();

    assert_eq!(driver.cnh_category.label(), "B, C");
    assert!(driver.cnh_category.contains(LicenseCategory::C.flag()));
    assert!(driver.updated_at.is_none());
    assert_eq!(driver.id(), "d-1");
}

#[test]
fn order_reads_integer_status_and_lines() {
    let order: Order = serde_json::from_value(json!({
        "id": "o-1",
        "orderNumber": "PED-001",
        "customerName": "Acme",
        "status": 1,
        "items": [
            { "id": "l-1", "inventoryId": "i-1", "quantity": 3, "productCode": "P-1" }
        ],
        "createdAt": "2026-10-14T08:00:00Z",
        "updatedAt": null
    }))
    .unwrap();

    assert_eq!(order.status, OrderStatus::InSeparation);
    assert_eq!(order.items[0].product_code.as_deref(), Some("P-1"));
    assert_eq!(order.items[0].price, None);
    assert_eq!(order.created_at(), Utc.with_ymd_and_hms(2026, 10, 14, 8, 0, 0).unwrap());
}

#[test]
fn expedition_reads_status_by_name_and_tolerates_unknown() {
    let mut raw = json!({
        "id": "e-1",
        "orderId": "o-1",
        "orderNumber": "PED-001",
        "customerName": "Acme",
        "orderStatus": "Cancelled",
        "driverId": "d-1",
        "driverName": "Maria",
        "truckId": "t-1",
        "truckModel": "Atego",
        "truckPlate": "ABC1D23",
        "deliveryForecast": "2026-10-20T00:00:00Z",
        "observation": "",
        "createdAt": "2026-10-14T08:00:00Z"
    });

    let expedition: Expedition = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(expedition.order_status, Some(OrderStatus::Canceled));

    raw["orderStatus"] = json!("Archived");
    let expedition: Expedition = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(expedition.order_status, None);

    raw.as_object_mut().unwrap().remove("orderStatus");
    let expedition: Expedition = serde_json::from_value(raw).unwrap();
    assert_eq!(expedition.order_status, None);
}

#[test]
fn update_bodies_are_camel_case_with_utc_millis() {
    let update = ExpeditionUpdate {
        delivery_forecast: Utc.with_ymd_and_hms(2026, 10, 20, 3, 0, 0).unwrap(),
        observation: "Portão 2".to_owned(),
        driver_id: "d-1".to_owned(),
        truck_id: "t-1".to_owned(),
    };

    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({
            "deliveryForecast": "2026-10-20T03:00:00.000Z",
            "observation": "Portão 2",
            "driverId": "d-1",
            "truckId": "t-1"
        })
    );
}

#[test]
fn inbound_input_nests_inventory_and_omits_missing_observation() {
    let input = InboundEntryInput {
        inventory_input: InventoryInput {
            product_code: "P-9".to_owned(),
            description: "Parafuso".to_owned(),
            quantity: 100,
            price: 0.5,
        },
        reference: "NF-123".to_owned(),
        supplier_name: "Fornecedor".to_owned(),
        observation: None,
    };

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["inventoryInput"]["productCode"], "P-9");
    assert!(value.get("observation").is_none());
}

#[test]
fn stats_default_missing_counters() {
    let stats: ExpeditionStats = serde_json::from_value(json!({ "total": 4, "inTransit": 1 })).unwrap();
    assert_eq!(stats, ExpeditionStats { total: 4, in_transit: 1, ..ExpeditionStats::default() });
}
