#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! Wire-format checks: external test harnesses script against camelCase
//! field names, so key spelling is part of the API contract.

use jumpingfox_core::metrics::MetricsService;
use jumpingfox_core::model::{ApiResponse, Fox, FoxInput};
use jumpingfox_core::store::DataStore;

#[test]
fn fox_serializes_camel_case() {
    let store = DataStore::empty();
    let fox = store.create_fox(FoxInput {
        name: "Copper".to_owned(),
        color: "Orange".to_owned(),
        jump_height: 4,
        is_active: true,
    });

    let value = serde_json::to_value(&fox).unwrap();
    assert_eq!(value["jumpHeight"], 4);
    assert_eq!(value["isActive"], true);
    assert!(value.get("createdAt").is_some());
    assert!(value.get("jump_height").is_none());
}

#[test]
fn fox_input_accepts_camel_case_and_defaults() {
    let input: FoxInput =
        serde_json::from_str(r#"{"name": "Copper", "jumpHeight": 7}"#).unwrap();
    assert_eq!(input.jump_height, 7);
    assert_eq!(input.color, "");
    assert!(!input.is_active);
}

#[test]
fn metrics_snapshot_serializes_camel_case() {
    let metrics = MetricsService::new();
    metrics.record("GET /api/fox");

    let value = serde_json::to_value(metrics.snapshot()).unwrap();
    assert_eq!(value["totalRequests"], 1);
    assert_eq!(value["endpointCalls"]["GET /api/fox"], 1);
    assert!(value.get("lastRequestTime").is_some());
}

#[test]
fn envelope_failure_has_no_data() {
    let value = serde_json::to_value(ApiResponse::<Fox>::failure("nope")).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["data"], serde_json::Value::Null);
    assert_eq!(value["message"], "nope");
    assert!(value.get("timestamp").is_some());
}
