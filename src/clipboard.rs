//! Clipboard: the scoped store port, the JSON payload codec, and centroid
//! math for shape-preserving paste.
//!
//! The copied entity set is serialized verbatim (including positions) into a
//! host-provided key/value slot, so a copy survives for the session
//! regardless of where the host keeps it. On paste the editor re-instantiates
//! the set around a target anchor: each entity keeps its offset from the
//! original set's centroid, so relative geometry is preserved.
//!
//! A payload that fails to parse is treated as an empty clipboard rather
//! than surfacing an error.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::collections::HashMap;

use tracing::warn;

use crate::geom::Point;
use crate::layout::Entity;

/// Session-scoped key/value slot holding the serialized clipboard payload.
///
/// Hosts back this with whatever storage they have (browser local storage,
/// an app-scoped map). [`MemoryClipboard`] is the in-process implementation
/// used by tests and headless hosts.
pub trait ClipboardStore {
    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: String);

    /// Retrieve the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory [`ClipboardStore`].
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    slots: HashMap<String, String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardStore for MemoryClipboard {
    fn put(&mut self, key: &str, value: String) {
        self.slots.insert(key.to_owned(), value);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }
}

/// Serialize a copied entity set to its JSON payload form.
#[must_use]
pub fn encode_payload(entities: &[Entity]) -> String {
    // Entity contains no non-serializable fields; encoding cannot fail in
    // practice, and an empty array is the safe fallback if it ever did.
    serde_json::to_string(entities).unwrap_or_else(|_| "[]".to_owned())
}

/// Decode a clipboard payload, failing closed to an empty set.
#[must_use]
pub fn decode_payload(json: &str) -> Vec<Entity> {
    match serde_json::from_str(json) {
        Ok(entities) => entities,
        Err(err) => {
            warn!(error = %err, "discarding unreadable clipboard payload");
            Vec::new()
        }
    }
}

/// Centroid of the given entity positions. `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(entities: &[Entity]) -> Option<Point> {
    if entities.is_empty() {
        return None;
    }
    let n = entities.len() as f64;
    let sum_x: f64 = entities.iter().map(|e| e.position.x).sum();
    let sum_y: f64 = entities.iter().map(|e| e.position.y).sum();
    Some(Point::new(sum_x / n, sum_y / n))
}
