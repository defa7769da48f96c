//! Layout model: placed entities, connections, and the in-memory state.
//!
//! This module defines what is on the floor plan (`Entity`, `EntityKind`),
//! the directed edges between building ports (`Connection`), and the
//! authoritative runtime state that owns both (`LayoutState`).
//!
//! `LayoutState` is mutated only by the editor; the history manager and the
//! clipboard only ever receive clones. The store enforces the one structural
//! invariant itself: removing an entity atomically removes every connection
//! touching it, so dangling connections cannot persist.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Point;
use crate::ports::{Phase, PortDirection};

/// Unique identifier for a placed entity.
pub type EntityId = Uuid;

/// Unique identifier for a connection.
pub type ConnectionId = Uuid;

/// The kind of a placed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Carries production semantics: resolved ports, recipe I/O.
    Building,
    /// Foundations, walls, beams and the like; no ports.
    Structural,
}

/// Real-world footprint in meters, copied from catalog clearance at creation.
///
/// Rotation is visual only; the footprint is never re-flattened when the
/// entity rotates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Footprint {
    /// Width along the x axis.
    pub width: f64,
    /// Length along the y axis.
    pub length: f64,
}

/// A typed connection point cached on a building entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Input or output.
    pub direction: PortDirection,
    /// Material phase the port carries.
    pub phase: Phase,
}

/// Address of a port on an entity: direction plus ordinal index within that
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRef {
    /// Which side of the building the port is on.
    pub direction: PortDirection,
    /// Zero-based index among the ports of that direction.
    pub index: usize,
}

/// A placed item on the floor plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier, stable for the entity's lifetime, never reused.
    pub id: EntityId,
    /// Building or structural piece.
    pub kind: EntityKind,
    /// Reference into the static catalog; immutable after creation.
    pub type_id: String,
    /// Catalog display name captured at creation time.
    pub name: String,
    /// Grid-aligned position in world meters.
    pub position: Point,
    /// Rotation in degrees, a multiple of 45 in `[0, 360)`. The rotate
    /// operation maintains the invariant, not the storage.
    pub rotation: u16,
    /// Footprint copied from the catalog at creation.
    pub footprint: Footprint,
    /// Ports resolved once at creation and cached; empty for structural
    /// pieces.
    pub ports: Vec<Port>,
    /// Transient selection flag. Carried in history snapshots so undo
    /// restores the selection in effect at commit time.
    #[serde(default)]
    pub selected: bool,
}

impl Entity {
    /// Look up a port by direction and ordinal index.
    #[must_use]
    pub fn port(&self, port: PortRef) -> Option<&Port> {
        self.ports.iter().filter(|p| p.direction == port.direction).nth(port.index)
    }

    /// Number of input ports.
    #[must_use]
    pub fn input_count(&self) -> usize {
        self.ports.iter().filter(|p| p.direction == PortDirection::Input).count()
    }

    /// Number of output ports.
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.ports.iter().filter(|p| p.direction == PortDirection::Output).count()
    }
}

/// A directed edge from an output port to an input port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique identifier for this connection.
    pub id: ConnectionId,
    /// Entity whose output feeds the edge.
    pub source_entity: EntityId,
    /// Output port index on the source entity.
    pub source_port: usize,
    /// Entity whose input the edge feeds.
    pub target_entity: EntityId,
    /// Input port index on the target entity.
    pub target_port: usize,
}

/// The authoritative in-memory snapshot of a floor plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutState {
    entities: HashMap<EntityId, Entity>,
    connections: HashMap<ConnectionId, Connection>,
}

impl LayoutState {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Entities ---

    /// Insert or replace an entity.
    pub fn insert(&mut self, entity: Entity) {
        self.entities.insert(entity.id, entity);
    }

    /// Entity by id.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Mutable entity by id.
    pub fn entity_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Remove an entity and every connection touching it, returning the
    /// entity if it was present.
    pub fn remove_entity(&mut self, id: &EntityId) -> Option<Entity> {
        let entity = self.entities.remove(id)?;
        self.connections.retain(|_, c| c.source_entity != *id && c.target_entity != *id);
        Some(entity)
    }

    /// All entities, unordered.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// All entities sorted by id for deterministic iteration.
    #[must_use]
    pub fn sorted_entities(&self) -> Vec<&Entity> {
        let mut list: Vec<&Entity> = self.entities.values().collect();
        list.sort_by_key(|e| e.id);
        list
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the layout holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // --- Connections ---

    /// Insert or replace a connection. Caller is responsible for endpoint
    /// validation; the store only guards the delete cascade.
    pub fn insert_connection(&mut self, connection: Connection) {
        self.connections.insert(connection.id, connection);
    }

    /// Connection by id.
    #[must_use]
    pub fn connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    /// All connections, unordered.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Number of connections.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// True if the given output port already feeds a connection.
    #[must_use]
    pub fn output_occupied(&self, entity: EntityId, index: usize) -> bool {
        self.connections
            .values()
            .any(|c| c.source_entity == entity && c.source_port == index)
    }

    /// True if the given input port is already fed by a connection.
    #[must_use]
    pub fn input_occupied(&self, entity: EntityId, index: usize) -> bool {
        self.connections
            .values()
            .any(|c| c.target_entity == entity && c.target_port == index)
    }

    // --- Selection ---

    /// Ids of all currently selected entities, sorted for determinism.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> =
            self.entities.values().filter(|e| e.selected).map(|e| e.id).collect();
        ids.sort();
        ids
    }

    /// Deselect every entity.
    pub fn clear_selection(&mut self) {
        for entity in self.entities.values_mut() {
            entity.selected = false;
        }
    }
}
