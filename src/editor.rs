//! Editor: translates discrete user intents into layout mutations, each
//! followed by a history commit.
//!
//! All mutation happens synchronously on the thread that delivered the user
//! event; a handler runs to completion before the next intent arrives, so
//! history commits are strictly ordered. Operations referencing a missing
//! entity are silent no-ops that commit nothing — the caller can tell from
//! the return value, but no error is raised.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use tracing::debug;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::clipboard::{self, ClipboardStore};
use crate::consts::{
    CLIPBOARD_KEY, DEFAULT_ANCHOR_X, DEFAULT_ANCHOR_Y, FULL_TURN_DEG, GRID_UNIT_M,
    ROTATION_STEP_DEG,
};
use crate::geom::{self, Point};
use crate::history::History;
use crate::layout::{
    Connection, ConnectionId, Entity, EntityId, EntityKind, Footprint, LayoutState, Port, PortRef,
};
use crate::ports::{self, PortDirection};

/// The floor-plan editor: owns the live [`LayoutState`], the snapshot
/// history, the static catalog, and the injected clipboard slot.
pub struct Editor {
    catalog: Catalog,
    clipboard: Box<dyn ClipboardStore>,
    state: LayoutState,
    history: History,
    /// Set while an undo/redo restore is applied, so a restore can never be
    /// recorded as a fresh edit (which would pollute `past` and clear
    /// `future`).
    restoring: bool,
}

impl Editor {
    /// Create an editor over an empty layout.
    #[must_use]
    pub fn new(catalog: Catalog, clipboard: Box<dyn ClipboardStore>) -> Self {
        let state = LayoutState::new();
        let history = History::new(state.clone());
        Self { catalog, clipboard, state, history, restoring: false }
    }

    // --- Queries ---

    /// The live layout.
    #[must_use]
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// The static catalog this editor resolves against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether an undo would have an effect.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo would have an effect.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Placement ---

    /// Place a building at the default anchor, snapped. Ports are resolved
    /// from the catalog once, here, and cached on the entity.
    ///
    /// An unknown `type_id` still succeeds: the resolver falls back to the
    /// generic 1-in/1-out layout and the id doubles as the display name.
    pub fn add_building(&mut self, type_id: &str) -> EntityId {
        let io = ports::resolve_io(&self.catalog, type_id);
        let mut port_list: Vec<Port> = io
            .inputs
            .iter()
            .map(|spec| Port { direction: PortDirection::Input, phase: spec.phase })
            .collect();
        port_list.extend(
            io.outputs
                .iter()
                .map(|spec| Port { direction: PortDirection::Output, phase: spec.phase }),
        );

        let (name, footprint) = self
            .catalog
            .building(type_id)
            .map(|b| {
                (b.name.clone(), Footprint { width: b.clearance.width, length: b.clearance.length })
            })
            .unwrap_or_else(|| (type_id.to_owned(), Footprint::default()));

        let entity = Entity {
            id: Uuid::new_v4(),
            kind: EntityKind::Building,
            type_id: type_id.to_owned(),
            name,
            position: default_anchor(),
            rotation: 0,
            footprint,
            ports: port_list,
            selected: false,
        };
        let id = entity.id;
        self.state.insert(entity);
        self.commit("add building");
        id
    }

    /// Place a structural piece at the default anchor, snapped. Structural
    /// pieces carry no ports.
    pub fn add_structural(&mut self, type_id: &str) -> EntityId {
        let entity = self.make_structural(type_id, default_anchor());
        let id = entity.id;
        self.state.insert(entity);
        self.commit("add structural");
        id
    }

    /// Tile `rows` x `cols` structural pieces with no gaps, stepping by the
    /// piece's own footprint. One history commit covers the whole batch.
    ///
    /// Zero rows or columns is a no-op: no entities, no commit.
    pub fn bulk_place_grid(&mut self, rows: u32, cols: u32, type_id: &str) -> Vec<EntityId> {
        if rows == 0 || cols == 0 {
            return Vec::new();
        }

        let anchor = default_anchor();
        let step = self
            .catalog
            .buildable(type_id)
            .map(|b| (b.clearance.width, b.clearance.length))
            .unwrap_or_default();

        let mut ids = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                let position = Point::new(
                    anchor.x + f64::from(col) * step.0,
                    anchor.y + f64::from(row) * step.1,
                );
                let entity = self.make_structural(type_id, geom::snap(position, GRID_UNIT_M));
                ids.push(entity.id);
                self.state.insert(entity);
            }
        }
        self.commit("bulk place grid");
        ids
    }

    fn make_structural(&self, type_id: &str, position: Point) -> Entity {
        let (name, footprint) = self
            .catalog
            .buildable(type_id)
            .map(|b| {
                (b.name.clone(), Footprint { width: b.clearance.width, length: b.clearance.length })
            })
            .unwrap_or_else(|| (type_id.to_owned(), Footprint::default()));

        Entity {
            id: Uuid::new_v4(),
            kind: EntityKind::Structural,
            type_id: type_id.to_owned(),
            name,
            position,
            rotation: 0,
            footprint,
            ports: Vec::new(),
            selected: false,
        }
    }

    // --- Transforms ---

    /// Drag-end: move an entity to the snapped position. Returns `false`
    /// (no commit) if the entity does not exist.
    pub fn move_to(&mut self, id: EntityId, raw: Point) -> bool {
        let Some(entity) = self.state.entity_mut(&id) else {
            return false;
        };
        entity.position = geom::snap(raw, GRID_UNIT_M);
        self.commit("move");
        true
    }

    /// Rotate one entity 45 degrees clockwise, wrapping at a full turn.
    pub fn rotate(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.state.entity_mut(&id) else {
            return false;
        };
        entity.rotation = (entity.rotation + ROTATION_STEP_DEG) % FULL_TURN_DEG;
        self.commit("rotate");
        true
    }

    /// Rotate every selected entity 45 degrees as one undoable step.
    /// Returns `false` (no commit) when nothing is selected.
    pub fn rotate_selection(&mut self) -> bool {
        let selected = self.state.selected_ids();
        if selected.is_empty() {
            return false;
        }
        for id in selected {
            if let Some(entity) = self.state.entity_mut(&id) {
                entity.rotation = (entity.rotation + ROTATION_STEP_DEG) % FULL_TURN_DEG;
            }
        }
        self.commit("rotate selection");
        true
    }

    // --- Deletion ---

    /// Delete one entity and every connection touching it.
    pub fn delete(&mut self, id: EntityId) -> bool {
        if self.state.remove_entity(&id).is_none() {
            return false;
        }
        self.commit("delete");
        true
    }

    /// Delete every selected entity (with its connections) as one undoable
    /// step. Returns `false` (no commit) when nothing is selected.
    pub fn delete_selection(&mut self) -> bool {
        let selected = self.state.selected_ids();
        if selected.is_empty() {
            return false;
        }
        for id in selected {
            self.state.remove_entity(&id);
        }
        self.commit("delete selection");
        true
    }

    // --- Connections ---

    /// Connect an output port on `source` to an input port on `target`.
    ///
    /// The connection is created only if both entities exist, both ports
    /// exist, and neither port already carries a connection in the implied
    /// direction. Anything else is a no-op returning `None`.
    pub fn connect(
        &mut self,
        source: EntityId,
        source_port: usize,
        target: EntityId,
        target_port: usize,
    ) -> Option<ConnectionId> {
        let source_ok = self
            .state
            .entity(&source)
            .and_then(|e| e.port(PortRef { direction: PortDirection::Output, index: source_port }))
            .is_some();
        let target_ok = self
            .state
            .entity(&target)
            .and_then(|e| e.port(PortRef { direction: PortDirection::Input, index: target_port }))
            .is_some();
        if !source_ok || !target_ok {
            return None;
        }
        if self.state.output_occupied(source, source_port)
            || self.state.input_occupied(target, target_port)
        {
            return None;
        }

        let connection = Connection {
            id: Uuid::new_v4(),
            source_entity: source,
            source_port,
            target_entity: target,
            target_port,
        };
        let id = connection.id;
        self.state.insert_connection(connection);
        self.commit("connect");
        Some(id)
    }

    // --- Selection (transient, never committed) ---

    /// Mark an entity selected. Returns `false` if it does not exist.
    pub fn select(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.state.entity_mut(&id) else {
            return false;
        };
        entity.selected = true;
        true
    }

    /// Unmark an entity. Returns `false` if it does not exist.
    pub fn deselect(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.state.entity_mut(&id) else {
            return false;
        };
        entity.selected = false;
        true
    }

    /// Deselect everything (pane click).
    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    // --- Clipboard ---

    /// Serialize the selected entities into the clipboard slot. Returns how
    /// many were copied; zero means the slot was left untouched.
    pub fn copy_selection(&mut self) -> usize {
        let selected: Vec<Entity> = self
            .state
            .sorted_entities()
            .into_iter()
            .filter(|e| e.selected)
            .cloned()
            .collect();
        if selected.is_empty() {
            return 0;
        }
        self.clipboard.put(CLIPBOARD_KEY, clipboard::encode_payload(&selected));
        selected.len()
    }

    /// Re-instantiate the copied set centered on `anchor`, preserving each
    /// entity's offset from the original set's centroid (modulo snapping).
    ///
    /// Fresh ids are generated; pasted entities become the selection and the
    /// previous selection is cleared. The whole batch is one undoable step.
    /// An empty or unreadable clipboard is a no-op.
    pub fn paste(&mut self, anchor: Point) -> Vec<EntityId> {
        let Some(payload) = self.clipboard.get(CLIPBOARD_KEY) else {
            return Vec::new();
        };
        let copied = clipboard::decode_payload(&payload);
        let Some(center) = clipboard::centroid(&copied) else {
            return Vec::new();
        };

        self.state.clear_selection();
        let mut ids = Vec::with_capacity(copied.len());
        for mut entity in copied {
            entity.id = Uuid::new_v4();
            entity.position = geom::snap(
                Point::new(
                    anchor.x + (entity.position.x - center.x),
                    anchor.y + (entity.position.y - center.y),
                ),
                GRID_UNIT_M,
            );
            entity.selected = true;
            ids.push(entity.id);
            self.state.insert(entity);
        }
        self.commit("paste");
        ids
    }

    // --- History ---

    /// Undo one step. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Redo one step. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Replace the live layout and restart history from it. The given state
    /// becomes the new un-undoable initial snapshot.
    pub fn reset(&mut self, state: LayoutState) {
        self.history = History::new(state.clone());
        self.state = state;
    }

    /// Apply a snapshot without touching history.
    fn restore(&mut self, snapshot: LayoutState) {
        self.restoring = true;
        self.state = snapshot;
        self.restoring = false;
    }

    /// Record the live state as one undoable step, unless a restore is in
    /// progress.
    fn commit(&mut self, action: &str) {
        if self.restoring {
            return;
        }
        self.history.commit(self.state.clone());
        debug!(
            action,
            entities = self.state.len(),
            connections = self.state.connection_count(),
            "committed"
        );
    }
}

fn default_anchor() -> Point {
    geom::snap(Point::new(DEFAULT_ANCHOR_X, DEFAULT_ANCHOR_Y), GRID_UNIT_M)
}
