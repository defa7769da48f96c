//! Logic core for a 2D factory floor planner.
//!
//! This crate owns everything about a floor plan except how it is drawn:
//! the placed-entity data model with grid snapping, a linear undo/redo
//! history over immutable layout snapshots, a centroid-preserving clipboard,
//! and a tiered resolver that infers a building's input/output ports from
//! static game data. The host (renderer, palette, persistence layer) reads
//! [`layout::LayoutState`] to draw and calls [`editor::Editor`] operations
//! in response to discrete user intents; it never mutates the layout
//! directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Top-level [`editor::Editor`] orchestrating intents into mutations and commits |
//! | [`layout`] | Placed entities, connections, and the in-memory layout state |
//! | [`history`] | Two-stack snapshot history for undo/redo |
//! | [`clipboard`] | Clipboard store port, payload codec, centroid math |
//! | [`ports`] | Building I/O resolution over the catalog |
//! | [`catalog`] | Static game-data tables (buildings, pieces, items, recipes) |
//! | [`geom`] | World-space points and grid snapping |
//! | [`consts`] | Shared numeric constants (grid unit, anchors, rotation step) |

pub mod catalog;
pub mod clipboard;
pub mod consts;
pub mod editor;
pub mod geom;
pub mod history;
pub mod layout;
pub mod ports;
