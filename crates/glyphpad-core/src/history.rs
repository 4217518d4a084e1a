//! Undo/redo history of scene snapshots.

use crate::scene::Scene;
use std::sync::Arc;

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// Two-stack undo/redo history over immutable scene snapshots.
///
/// Snapshots are `Arc`-shared with the engine's current scene, so recording
/// one is O(1) and never copies items. The history is linear: recording a
/// new snapshot discards any pending redo states.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    /// Older states, most recent last.
    undo_stack: Vec<Arc<Scene>>,
    /// Undone states, most recent last.
    redo_stack: Vec<Arc<Scene>>,
}

impl HistoryManager {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `scene` as an undoable state (call before making changes).
    pub fn snapshot(&mut self, scene: Arc<Scene>) {
        self.undo_stack.push(scene);
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Step back once. `current` moves onto the redo stack and the popped
    /// snapshot is returned as the new current scene.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Arc<Scene>) -> Option<Arc<Scene>> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Step forward once. `current` moves onto the undo stack and the popped
    /// snapshot is returned as the new current scene.
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: Arc<Scene>) -> Option<Arc<Scene>> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snapshot)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
