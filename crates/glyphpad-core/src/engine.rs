//! Editor engine: the command layer over scenes and history.

use crate::history::HistoryManager;
use crate::item::{ItemId, TextItem};
use crate::scene::Scene;
use crate::style::{FONT_SIZE_STEP, MIN_FONT_SIZE, SizeStep, StyleDelta, StyleFlag, StyleSet};
use kurbo::{Point, Vec2};
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by engine commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for engine commands.
pub type EngineResult<T> = Result<T, EngineError>;

/// State of an in-progress drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// An item is following the pointer.
    Dragging {
        /// The item being dragged.
        item: ItemId,
        /// Offset from the item's top-left corner to the pointer at grab time.
        offset: Vec2,
    },
}

/// Orchestrates scene mutations through the history manager.
///
/// Every mutating command records the current scene before applying its
/// change, so one `undo` reverts exactly one command. A drag gesture counts
/// as a single command: `begin_drag` snapshots once and the following
/// `update_drag` calls rewrite the same scene edit.
///
/// Commands run synchronously to completion. The engine is not internally
/// synchronized; callers sharing one across threads must serialize access.
#[derive(Debug, Clone)]
pub struct EditorEngine {
    current: Arc<Scene>,
    history: HistoryManager,
    selected: Option<ItemId>,
    /// Style applied to the next added text; mirrors the toolbar.
    pending_style: StyleSet,
    drag: DragState,
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorEngine {
    /// Create an engine with an empty scene and no history.
    pub fn new() -> Self {
        Self {
            current: Arc::new(Scene::new()),
            history: HistoryManager::new(),
            selected: None,
            pending_style: StyleSet::default(),
            drag: DragState::Idle,
        }
    }

    /// The scene as it currently stands (read-only view for rendering).
    pub fn scene(&self) -> &Scene {
        &self.current
    }

    /// The currently selected item, if any. May point at an item that a
    /// later undo removed; style commands then mutate nothing.
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Style applied to the next added text (for toolbar state).
    pub fn pending_style(&self) -> &StyleSet {
        &self.pending_style
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Check if a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Snapshot the current scene, then replace it with `edit`'s result.
    fn commit(&mut self, edit: impl FnOnce(&Scene) -> Scene) {
        self.history.snapshot(Arc::clone(&self.current));
        self.current = Arc::new(edit(&self.current));
    }

    /// Append a new text item and return its id.
    ///
    /// Rejects empty or whitespace-only content before touching the scene or
    /// the history. The new item lands on top of the z-order and is not
    /// selected.
    pub fn add_text(
        &mut self,
        content: &str,
        position: Point,
        style: StyleSet,
    ) -> EngineResult<ItemId> {
        if content.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "text content is empty".to_string(),
            ));
        }

        let item = TextItem::new(content.to_string(), position, style);
        let id = item.id();
        self.commit(|scene| scene.with_item(item));
        log::debug!("added text item {id}");
        Ok(id)
    }

    /// Restyle the selected item by merging `delta` over its current style.
    /// Silently does nothing without a selection, or when the selected item
    /// no longer exists.
    pub fn update_style(&mut self, delta: &StyleDelta) {
        let Some(id) = self.selected else { return };
        if !self.current.contains(id) {
            return;
        }
        self.commit(|scene| scene.with_updated(id, |item| item.with_style(item.style.merged(delta))));
    }

    /// Step the pending font size up or down, clamped to [`MIN_FONT_SIZE`].
    ///
    /// The selected item, if any, is restyled to the new size as well.
    /// Returns the new pending size.
    pub fn adjust_font_size(&mut self, step: SizeStep) -> u32 {
        let size = self.pending_style.font_size;
        let new_size = match step {
            SizeStep::Increase => size + FONT_SIZE_STEP,
            SizeStep::Decrease => size.saturating_sub(FONT_SIZE_STEP).max(MIN_FONT_SIZE),
        };
        self.pending_style.font_size = new_size;
        self.update_style(&StyleDelta::default().with_font_size(new_size));
        new_size
    }

    /// Set the pending font family, restyling the selected item as well.
    pub fn set_font_family(&mut self, family: &str) {
        self.pending_style.font_family = family.to_string();
        self.update_style(&StyleDelta::default().with_font_family(family));
    }

    /// Flip a pending style flag.
    ///
    /// The selected item, if any, receives the flipped pending value — the
    /// pending style is the source of truth, broadcast to the selection,
    /// not a re-toggle of the item's own flag.
    pub fn toggle_style_flag(&mut self, flag: StyleFlag) {
        let value = !self.pending_style.flag(flag);
        self.pending_style.set_flag(flag, value);
        self.update_style(&StyleDelta::default().with_flag(flag, value));
    }

    /// Change the selection. Pure state change, never recorded in history.
    pub fn select(&mut self, id: Option<ItemId>) {
        self.selected = id;
    }

    /// Start dragging `id` from `pointer`.
    ///
    /// Snapshots once for the whole gesture and selects the item. Ignored if
    /// a drag is already in progress or the item does not exist.
    pub fn begin_drag(&mut self, id: ItemId, pointer: Point) {
        if self.is_dragging() {
            log::warn!("begin_drag while a drag is in progress; ignored");
            return;
        }
        let Some(item) = self.current.get(id) else {
            log::warn!("begin_drag on unknown item {id}; ignored");
            return;
        };

        let offset = pointer - item.position;
        self.history.snapshot(Arc::clone(&self.current));
        self.selected = Some(id);
        self.drag = DragState::Dragging { item: id, offset };
    }

    /// Move the dragged item so it keeps its grab offset under `pointer`.
    /// No-op while idle. Safe at arbitrary call rates: each call is a single
    /// index lookup and item replace, with no further history traffic.
    pub fn update_drag(&mut self, pointer: Point) {
        let DragState::Dragging { item, offset } = self.drag else {
            return;
        };
        let position = pointer - offset;
        self.current = Arc::new(
            self.current
                .with_updated(item, |i| i.with_position(position)),
        );
    }

    /// Finish the drag gesture. The scene keeps the last dragged position.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Undo the last command.
    /// Returns false when there is nothing to undo or a drag is in progress.
    /// The selection is left as-is even if the restored scene no longer
    /// contains it.
    pub fn undo(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        match self.history.undo(Arc::clone(&self.current)) {
            Some(scene) => {
                self.current = scene;
                true
            }
            None => false,
        }
    }

    /// Redo the last undone command.
    /// Returns false when there is nothing to redo or a drag is in progress.
    pub fn redo(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        match self.history.redo(Arc::clone(&self.current)) {
            Some(scene) => {
                self.current = scene;
                true
            }
            None => false,
        }
    }

    /// Remove the selected item. Returns whether anything was removed.
    pub fn remove_selected(&mut self) -> bool {
        let Some(id) = self.selected else { return false };
        if !self.current.contains(id) {
            return false;
        }
        self.commit(|scene| scene.without_item(id));
        self.selected = None;
        true
    }

    /// Remove every item. No-op (and no history entry) on an empty scene.
    pub fn clear(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.commit(|_| Scene::new());
        self.selected = None;
    }

    /// Replace the selected item's content.
    ///
    /// The same content guard as [`EditorEngine::add_text`] applies. Without
    /// a live selection the command is a silent no-op.
    pub fn update_content(&mut self, content: &str) -> EngineResult<()> {
        if content.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "text content is empty".to_string(),
            ));
        }
        let Some(id) = self.selected else { return Ok(()) };
        if !self.current.contains(id) {
            return Ok(());
        }
        self.commit(|scene| scene.with_updated(id, |item| item.with_content(content.to_string())));
        Ok(())
    }

    /// Move the selected item to the top of the z-order.
    /// Returns true if the item moved.
    pub fn bring_selected_to_front(&mut self) -> bool {
        let Some(id) = self.selected else { return false };
        let Some(pos) = self.current.index_of(id) else {
            return false;
        };
        if pos + 1 == self.current.len() {
            return false;
        }
        self.commit(|scene| scene.brought_to_front(id));
        true
    }

    /// Move the selected item to the bottom of the z-order.
    /// Returns true if the item moved.
    pub fn send_selected_to_back(&mut self) -> bool {
        let Some(id) = self.selected else { return false };
        let Some(pos) = self.current.index_of(id) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        self.commit(|scene| scene.sent_to_back(id));
        true
    }
}
