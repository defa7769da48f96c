//! Shared numeric constants for the floorplan crate.

// ── Grid ────────────────────────────────────────────────────────

/// Grid unit in meters. Drag feedback and final placement must both snap
/// with this unit or the preview diverges from the committed position.
pub const GRID_UNIT_M: f64 = 1.0;

// ── Placement ───────────────────────────────────────────────────

/// X coordinate of the default drop anchor for newly added entities, in meters.
pub const DEFAULT_ANCHOR_X: f64 = 100.0;

/// Y coordinate of the default drop anchor for newly added entities, in meters.
pub const DEFAULT_ANCHOR_Y: f64 = 100.0;

// ── Rotation ────────────────────────────────────────────────────

/// Rotation increment per rotate action, in degrees.
pub const ROTATION_STEP_DEG: u16 = 45;

/// Rotations wrap at a full turn, keeping values in `[0, 360)`.
pub const FULL_TURN_DEG: u16 = 360;

// ── Clipboard ───────────────────────────────────────────────────

/// Key under which the copied entity set is stored in the scoped clipboard slot.
pub const CLIPBOARD_KEY: &str = "floorplan.copied-entities";
