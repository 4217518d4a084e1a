//! GlyphPad Core Library
//!
//! Headless engine for the GlyphPad text-annotation editor: immutable scenes
//! of positionable, styleable text items, an undo/redo history over scene
//! snapshots, and a command layer for direct-manipulation editing. Event
//! routing and rendering belong to the embedding application.

pub mod engine;
pub mod history;
pub mod item;
pub mod scene;
pub mod style;

pub use engine::{DragState, EditorEngine, EngineError, EngineResult};
pub use history::HistoryManager;
pub use item::{ItemId, TextItem};
pub use scene::{Scene, SceneError};
pub use style::{
    FONT_FAMILIES, FONT_SIZE_STEP, MIN_FONT_SIZE, SizeStep, StyleDelta, StyleFlag, StyleSet,
};
