//! Linear undo/redo history over immutable layout snapshots.
//!
//! Two stacks of full [`LayoutState`] values: `past` holds everything up to
//! and including the current state, `future` holds states undone since the
//! last edit. A new commit discards the redo branch. The history never
//! mutates a snapshot; callers get clones to restore.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::layout::LayoutState;

/// Snapshot history with linear undo/redo.
///
/// `past` is never empty: its oldest entry is always the initial (possibly
/// non-empty, e.g. after a reset) layout, which undo cannot pop.
#[derive(Debug, Clone)]
pub struct History {
    past: Vec<LayoutState>,
    future: Vec<LayoutState>,
}

impl History {
    /// Seed the history with the initial layout.
    #[must_use]
    pub fn new(initial: LayoutState) -> Self {
        Self { past: vec![initial], future: Vec::new() }
    }

    /// Record a committed edit: push the new current state and discard any
    /// redo branch. One commit per discrete user action, not per
    /// intermediate drag frame.
    pub fn commit(&mut self, snapshot: LayoutState) {
        self.past.push(snapshot);
        self.future.clear();
    }

    /// Step back one snapshot.
    ///
    /// Returns the state to restore, or `None` when only the initial
    /// snapshot remains (undo at the start of history is a no-op).
    pub fn undo(&mut self) -> Option<LayoutState> {
        if self.past.len() <= 1 {
            return None;
        }
        let current = self.past.pop()?;
        self.future.push(current);
        self.past.last().cloned()
    }

    /// Step forward one snapshot.
    ///
    /// Returns the state to restore, or `None` when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> Option<LayoutState> {
        let next = self.future.pop()?;
        self.past.push(next.clone());
        Some(next)
    }

    /// Whether an undo would have an effect. Drives UI enablement.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Whether a redo would have an effect.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undoable steps currently recorded.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.past.len() - 1
    }
}
