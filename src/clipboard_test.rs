#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::layout::{EntityKind, Footprint};

// =============================================================
// Helpers
// =============================================================

fn make_entity_at(x: f64, y: f64) -> Entity {
    Entity {
        id: Uuid::new_v4(),
        kind: EntityKind::Structural,
        type_id: "foundation_8x8".to_owned(),
        name: "Foundation".to_owned(),
        position: Point::new(x, y),
        rotation: 0,
        footprint: Footprint { width: 8.0, length: 8.0 },
        ports: Vec::new(),
        selected: true,
    }
}

// =============================================================
// MemoryClipboard
// =============================================================

#[test]
fn memory_clipboard_get_put() {
    let mut store = MemoryClipboard::new();
    assert!(store.get("slot").is_none());
    store.put("slot", "payload".to_owned());
    assert_eq!(store.get("slot").as_deref(), Some("payload"));
}

#[test]
fn memory_clipboard_put_replaces() {
    let mut store = MemoryClipboard::new();
    store.put("slot", "first".to_owned());
    store.put("slot", "second".to_owned());
    assert_eq!(store.get("slot").as_deref(), Some("second"));
}

// =============================================================
// Payload codec
// =============================================================

#[test]
fn payload_roundtrip_preserves_positions() {
    let entities = vec![make_entity_at(0.0, 0.0), make_entity_at(10.0, 0.0)];
    let json = encode_payload(&entities);
    let back = decode_payload(&json);
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].position, Point::new(0.0, 0.0));
    assert_eq!(back[1].position, Point::new(10.0, 0.0));
    assert_eq!(back[0].id, entities[0].id);
}

#[test]
fn corrupt_payload_decodes_to_empty() {
    assert!(decode_payload("not json at all").is_empty());
    assert!(decode_payload("{\"wrong\": \"shape\"}").is_empty());
}

#[test]
fn empty_array_payload_is_empty() {
    assert!(decode_payload("[]").is_empty());
}

// =============================================================
// Centroid
// =============================================================

#[test]
fn centroid_of_empty_set_is_none() {
    assert!(centroid(&[]).is_none());
}

#[test]
fn centroid_of_single_entity_is_its_position() {
    let entities = vec![make_entity_at(7.0, -3.0)];
    assert_eq!(centroid(&entities).unwrap(), Point::new(7.0, -3.0));
}

#[test]
fn centroid_averages_positions() {
    let entities = vec![
        make_entity_at(0.0, 0.0),
        make_entity_at(10.0, 0.0),
        make_entity_at(0.0, 10.0),
    ];
    let c = centroid(&entities).unwrap();
    assert!((c.x - 10.0 / 3.0).abs() < 1e-9);
    assert!((c.y - 10.0 / 3.0).abs() < 1e-9);
}
