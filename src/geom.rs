//! World-space geometry: points and grid snapping.
//!
//! Positions in the layout are measured in real-world meters. The grid
//! snapper rounds each axis independently to the nearest multiple of the
//! grid unit, so placement stays aligned no matter how an entity arrived at
//! its position (drag end, paste, bulk placement).

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in world space, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Snap a single axis value to the nearest multiple of `unit`.
///
/// Total over all finite inputs: a non-positive `unit` returns the value
/// unchanged rather than dividing by zero.
#[must_use]
pub fn snap_axis(value: f64, unit: f64) -> f64 {
    if unit <= 0.0 {
        return value;
    }
    (value / unit).round() * unit
}

/// Snap a point to the grid. Idempotent: snapping an already snapped point
/// is the identity.
#[must_use]
pub fn snap(p: Point, unit: f64) -> Point {
    Point { x: snap_axis(p.x, unit), y: snap_axis(p.y, unit) }
}
