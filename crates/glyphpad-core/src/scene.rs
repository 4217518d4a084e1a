//! Immutable scenes of ordered text items.

use crate::item::{ItemId, TextItem};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors from scene deserialization.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),
}

/// An ordered collection of text items.
///
/// Insertion order is z-order: later items render on top. A `Scene` is an
/// immutable value — every edit returns a new `Scene`, so prior scenes stay
/// valid as history snapshots. Items are shared between scenes via `Arc`;
/// an edit copies item pointers, never item contents.
///
/// Invariant: all item ids within a scene are unique. Edits preserve it
/// because new items always carry freshly generated ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    items: Vec<Arc<TextItem>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the scene has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by id.
    pub fn get(&self, id: ItemId) -> Option<&TextItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(Arc::as_ref)
    }

    /// Check if an item exists.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Position of an item in the z-order (0 = bottom).
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Items in z-order (back to front).
    pub fn items(&self) -> impl Iterator<Item = &TextItem> {
        self.items.iter().map(Arc::as_ref)
    }

    /// Scene with `item` appended on top.
    pub fn with_item(&self, item: TextItem) -> Scene {
        let mut scene = self.clone();
        scene.items.push(Arc::new(item));
        scene
    }

    /// Scene with the item for `id` replaced by `update`'s result.
    /// Returns an unchanged copy if `id` is absent.
    pub fn with_updated(&self, id: ItemId, update: impl FnOnce(&TextItem) -> TextItem) -> Scene {
        let mut scene = self.clone();
        if let Some(pos) = scene.index_of(id) {
            let updated = update(&scene.items[pos]);
            scene.items[pos] = Arc::new(updated);
        }
        scene
    }

    /// Scene without the item for `id`.
    pub fn without_item(&self, id: ItemId) -> Scene {
        let mut scene = self.clone();
        scene.items.retain(|item| item.id != id);
        scene
    }

    /// Scene with the item for `id` moved to the top of the z-order.
    pub fn brought_to_front(&self, id: ItemId) -> Scene {
        let mut scene = self.clone();
        if let Some(pos) = scene.index_of(id) {
            let item = scene.items.remove(pos);
            scene.items.push(item);
        }
        scene
    }

    /// Scene with the item for `id` moved to the bottom of the z-order.
    pub fn sent_to_back(&self, id: ItemId) -> Scene {
        let mut scene = self.clone();
        if let Some(pos) = scene.index_of(id) {
            let item = scene.items.remove(pos);
            scene.items.insert(0, item);
        }
        scene
    }

    /// Serialize the scene to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a scene from JSON, rejecting duplicate item ids.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        let mut seen = std::collections::HashSet::new();
        for item in &scene.items {
            if !seen.insert(item.id) {
                return Err(SceneError::DuplicateId(item.id));
            }
        }
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSet;
    use kurbo::Point;

    fn item(content: &str) -> TextItem {
        TextItem::new(content.to_string(), Point::new(10.0, 20.0), StyleSet::default())
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn test_with_item_appends_in_order() {
        let a = item("a");
        let b = item("b");
        let (id_a, id_b) = (a.id(), b.id());

        let scene = Scene::new().with_item(a).with_item(b);

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.index_of(id_a), Some(0));
        assert_eq!(scene.index_of(id_b), Some(1));
        let contents: Vec<_> = scene.items().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b"]);
    }

    #[test]
    fn test_with_updated_replaces_only_target() {
        let a = item("a");
        let b = item("b");
        let id_a = a.id();

        let before = Scene::new().with_item(a).with_item(b);
        let after = before.with_updated(id_a, |i| i.with_position(Point::new(5.0, 5.0)));

        assert_eq!(after.get(id_a).unwrap().position, Point::new(5.0, 5.0));
        // The prior scene is an independent snapshot.
        assert_eq!(before.get(id_a).unwrap().position, Point::new(10.0, 20.0));
        // Untouched items are shared, not copied.
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_with_updated_unknown_id_is_unchanged() {
        let scene = Scene::new().with_item(item("a"));
        let after = scene.with_updated(ItemId::new_v4(), |i| i.with_content("x".to_string()));
        assert_eq!(after, scene);
    }

    #[test]
    fn test_without_item() {
        let a = item("a");
        let id_a = a.id();
        let scene = Scene::new().with_item(a);

        let after = scene.without_item(id_a);
        assert!(after.is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_z_order_moves() {
        let a = item("a");
        let b = item("b");
        let c = item("c");
        let (id_a, id_c) = (a.id(), c.id());

        let scene = Scene::new().with_item(a).with_item(b).with_item(c);

        let front = scene.brought_to_front(id_a);
        assert_eq!(front.index_of(id_a), Some(2));

        let back = scene.sent_to_back(id_c);
        assert_eq!(back.index_of(id_c), Some(0));
    }

    #[test]
    fn test_json_roundtrip() {
        let a = item("hello");
        let id_a = a.id();
        let scene = Scene::new().with_item(a);

        let json = scene.to_json().unwrap();
        let restored = Scene::from_json(&json).unwrap();

        assert_eq!(restored, scene);
        assert_eq!(restored.get(id_a).unwrap().content, "hello");
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let scene = Scene::new().with_item(item("a"));
        let json = scene.to_json().unwrap();

        // Duplicate the single entry to violate the id invariant.
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = value["items"][0].clone();
        value["items"].as_array_mut().unwrap().push(entry);

        let result = Scene::from_json(&value.to_string());
        assert!(matches!(result, Err(SceneError::DuplicateId(_))));
    }
}
