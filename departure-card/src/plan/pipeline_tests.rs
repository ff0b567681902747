//! End-to-end tests from raw configuration and host state to a card view.

use super::*;
use crate::config::validate;
use crate::domain::EntityId;
use crate::host::HostState;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde_json::{Value, json};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
}

fn s1_to_blankenese(delay: i64) -> Value {
    json!({
        "line": "S1",
        "direction": "Blankenese",
        "type": "S",
        "departure": (now() + TimeDelta::seconds(125)).to_rfc3339(),
        "delay": delay
    })
}

fn host(entries: Vec<(&str, Value)>) -> HostState {
    entries
        .into_iter()
        .map(|(id, v)| (EntityId::new(id), v))
        .collect()
}

fn single_row(view: &CardView) -> &RenderRow {
    let rows = view.entities[0].rows().expect("entity should be found");
    assert_eq!(rows.len(), 1);
    &rows[0]
}

#[test]
fn countdown_without_delay() {
    let config = validate(&json!({ "entities": ["sensor.hbf"], "max": 5 })).unwrap();
    let host = host(vec![(
        "sensor.hbf",
        json!({ "attributes": { "friendly_name": "Hauptbahnhof", "next": [s1_to_blankenese(0)] } }),
    )]);

    let view = build_view(&config, &host, &now());
    let row = single_row(&view);

    assert_eq!(row.line_label, "S1");
    assert_eq!(row.type_class, "S");
    assert_eq!(row.direction, "Blankenese");
    assert_eq!(row.time_text, "2min");
    assert!(!row.has_delay);
    assert_eq!(row.delay_text, None);
}

#[test]
fn countdown_with_delay() {
    let config = validate(&json!({ "entities": ["sensor.hbf"] })).unwrap();
    let host = host(vec![(
        "sensor.hbf",
        json!({ "attributes": { "next": [s1_to_blankenese(300)] } }),
    )]);

    let view = build_view(&config, &host, &now());
    let row = single_row(&view);

    assert_eq!(row.time_text, "2min");
    assert!(row.has_delay);
    assert_eq!(row.delay_text.as_deref(), Some("5min"));
}

#[test]
fn missing_entity_does_not_block_siblings() {
    let config =
        validate(&json!({ "entities": ["sensor.gone", "sensor.hbf", "sensor.empty"] })).unwrap();
    let host = host(vec![
        (
            "sensor.hbf",
            json!({ "attributes": { "next": [s1_to_blankenese(0)] } }),
        ),
        ("sensor.empty", json!({ "attributes": { "next": [] } })),
    ]);

    let view = build_view(&config, &host, &now());

    let ids: Vec<&str> = view.entities.iter().map(|e| e.entity_id().as_str()).collect();
    assert_eq!(ids, vec!["sensor.gone", "sensor.hbf", "sensor.empty"]);

    assert_eq!(
        view.entities[0],
        EntityProjection::NotFound {
            entity_id: EntityId::new("sensor.gone")
        }
    );
    assert_eq!(view.entities[1].rows().map(<[RenderRow]>::len), Some(1));
    assert_eq!(view.entities[2].rows().map(<[RenderRow]>::len), Some(0));
}

#[test]
fn header_and_name_flags() {
    let config = validate(&json!({
        "entities": ["sensor.hbf"],
        "title": "Abfahrten",
        "show_name": false
    }))
    .unwrap();

    let view = build_view(&config, &HostState::new(), &now());
    assert_eq!(view.header.as_deref(), Some("Abfahrten"));
    assert!(!view.show_name);

    let config = validate(&json!({ "entities": ["sensor.hbf"], "show_title": false })).unwrap();
    let view = build_view(&config, &HostState::new(), &now());
    assert_eq!(view.header, None);
    assert!(view.show_name);
}

#[test]
fn clock_mode_respects_max() {
    let config = validate(&json!({
        "entities": ["sensor.hbf"],
        "show_time": true,
        "max": 2
    }))
    .unwrap();

    let next: Vec<Value> = (0..4)
        .map(|i| {
            json!({
                "line": format!("U{}", i + 1),
                "direction": "Barmbek",
                "type": "U",
                "departure": (now() + TimeDelta::minutes(10 * i)).to_rfc3339()
            })
        })
        .collect();
    let host = host(vec![("sensor.hbf", json!({ "attributes": { "next": next } }))]);

    let view = build_view(&config, &host, &now());
    let rows = view.entities[0].rows().unwrap();

    let texts: Vec<&str> = rows.iter().map(|r| r.time_text.as_str()).collect();
    assert_eq!(texts, vec!["10:00", "10:10"]);
}

#[test]
fn view_serializes_for_json_consumers() {
    let config = validate(&json!({ "entities": ["sensor.hbf"] })).unwrap();
    let host = host(vec![(
        "sensor.hbf",
        json!({ "attributes": { "friendly_name": "Hbf", "next": [s1_to_blankenese(0)] } }),
    )]);

    let value = serde_json::to_value(build_view(&config, &host, &now())).unwrap();
    assert_eq!(value["header"], "HVV Departures");
    assert_eq!(value["entities"][0]["status"], "found");
    assert_eq!(value["entities"][0]["friendly_name"], "Hbf");
    assert_eq!(value["entities"][0]["rows"][0]["time_text"], "2min");
}
