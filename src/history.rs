//! Command history: invertible edit records and the undo/redo stacks.
//!
//! Every committed edit is recorded as a [`Command`]. A command lives on
//! exactly one of the two stacks and moves between them atomically; any
//! commit that is not itself an undo/redo invalidates the redo stack.
//! Entity-carrying variants retain the full overlay or stroke value, keyed
//! by its stable id, so a delete/undo cycle reinserts the same identity
//! rather than chasing a dangling reference.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::doc::{Overlay, OverlayId, OverlayState, OverlayStore, Stroke, StrokeStore};

/// An immutable record of one committed edit.
#[derive(Debug, Clone)]
pub enum Command {
    /// A stroke was committed to the replay set.
    Stroke {
        /// The committed stroke, retained for redo.
        stroke: Stroke,
    },
    /// An overlay was added to the document.
    AddOverlay {
        /// The overlay as it existed at add time, retained for redo.
        overlay: Overlay,
    },
    /// An overlay was removed from the document.
    DeleteOverlay {
        /// The removed overlay, retained so undo can resurrect it.
        overlay: Overlay,
    },
    /// An overlay's geometry changed.
    TransformOverlay {
        /// Which overlay was transformed.
        id: OverlayId,
        /// Geometry before the edit.
        old_state: OverlayState,
        /// Geometry after the edit.
        new_state: OverlayState,
    },
}

/// Linear undo/redo history over the overlay and stroke stores.
///
/// `commit` records an edit that the caller has already applied; `undo`
/// and `redo` apply the recorded inverse/forward effects themselves.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self { undo_stack: Vec::new(), redo_stack: Vec::new() }
    }

    /// Record a committed edit. Any commit invalidates the redo stack.
    pub fn commit(&mut self, command: Command) {
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of commands on the undo stack.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of commands on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Revert the most recent command against the stores.
    ///
    /// Returns `false` (and changes nothing) when the undo stack is empty.
    pub fn undo(&mut self, overlays: &mut OverlayStore, strokes: &mut StrokeStore) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        Self::revert(&command, overlays, strokes);
        self.redo_stack.push(command);
        true
    }

    /// Reapply the most recently undone command against the stores.
    ///
    /// Returns `false` (and changes nothing) when the redo stack is empty.
    pub fn redo(&mut self, overlays: &mut OverlayStore, strokes: &mut StrokeStore) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        Self::apply(&command, overlays, strokes);
        self.undo_stack.push(command);
        true
    }

    /// Empty both stacks. Full reset; the stores are the caller's concern.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Forward effect of a command.
    fn apply(command: &Command, overlays: &mut OverlayStore, strokes: &mut StrokeStore) {
        match command {
            Command::Stroke { stroke } => strokes.push(stroke.clone()),
            Command::AddOverlay { overlay } => overlays.push(overlay.clone()),
            Command::DeleteOverlay { overlay } => {
                overlays.remove(&overlay.id);
            }
            Command::TransformOverlay { id, new_state, .. } => {
                if let Some(overlay) = overlays.get_mut(id) {
                    overlay.apply_state(new_state);
                }
            }
        }
    }

    /// Inverse effect of a command.
    fn revert(command: &Command, overlays: &mut OverlayStore, strokes: &mut StrokeStore) {
        match command {
            Command::Stroke { stroke } => {
                strokes.remove(&stroke.id);
            }
            Command::AddOverlay { overlay } => {
                overlays.remove(&overlay.id);
            }
            Command::DeleteOverlay { overlay } => overlays.push(overlay.clone()),
            Command::TransformOverlay { id, old_state, .. } => {
                if let Some(overlay) = overlays.get_mut(id) {
                    overlay.apply_state(old_state);
                }
            }
        }
    }
}
