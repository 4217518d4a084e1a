//! Positioned, styled text items.

use crate::style::StyleSet;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for text items.
pub type ItemId = Uuid;

/// A single positioned text annotation.
///
/// Identity is the `id`, assigned once at creation and never reused. Edits go
/// through the `with_*` constructors, which return a new value carrying the
/// same id; items inside a scene snapshot are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub(crate) id: ItemId,
    /// The annotation text.
    pub content: String,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// Font attributes.
    pub style: StyleSet,
}

impl TextItem {
    /// Create a new item with a freshly generated id.
    pub fn new(content: String, position: Point, style: StyleSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            position,
            style,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Copy of this item moved to `position`.
    pub fn with_position(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Copy of this item restyled.
    pub fn with_style(&self, style: StyleSet) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    /// Copy of this item with new content.
    pub fn with_content(&self, content: String) -> Self {
        Self {
            content,
            ..self.clone()
        }
    }
}
