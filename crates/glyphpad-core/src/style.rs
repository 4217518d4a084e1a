//! Text style values and partial style updates.

use serde::{Deserialize, Serialize};

/// Font families offered to the toolbar.
pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Times New Roman",
    "Courier New",
    "Verdana",
    "Georgia",
];

/// Smallest allowed font size in points. Adjustments clamp here, they never error.
pub const MIN_FONT_SIZE: u32 = 8;

/// Points added or removed per size adjustment.
pub const FONT_SIZE_STEP: u32 = 2;

/// Direction of a font size adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeStep {
    Increase,
    Decrease,
}

/// Boolean style attributes that can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
}

impl StyleFlag {
    /// Get all togglable flags.
    pub fn all() -> &'static [StyleFlag] {
        &[StyleFlag::Bold, StyleFlag::Italic, StyleFlag::Underline]
    }
}

/// Font rendering attributes for a text item.
///
/// A `StyleSet` is a plain value with structural equality; editing an item's
/// style produces a new `StyleSet` rather than mutating one inside a scene.
/// The size floor is enforced by the engine, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSet {
    /// Font size in points (>= 1).
    pub font_size: u32,
    /// Font family name as understood by the renderer.
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleSet {
    /// Default font size for new text.
    pub const DEFAULT_FONT_SIZE: u32 = 16;

    /// Create a style with the given size and family and no flags set.
    pub fn new(font_size: u32, font_family: impl Into<String>) -> Self {
        Self {
            font_size,
            font_family: font_family.into(),
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Merge a partial update over this style.
    ///
    /// Fields present in `delta` overwrite; absent fields keep their value.
    pub fn merged(&self, delta: &StyleDelta) -> StyleSet {
        StyleSet {
            font_size: delta.font_size.unwrap_or(self.font_size),
            font_family: delta
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            bold: delta.bold.unwrap_or(self.bold),
            italic: delta.italic.unwrap_or(self.italic),
            underline: delta.underline.unwrap_or(self.underline),
        }
    }

    /// Read a togglable flag.
    pub fn flag(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Italic => self.italic,
            StyleFlag::Underline => self.underline,
        }
    }

    /// Write a togglable flag.
    pub fn set_flag(&mut self, flag: StyleFlag, value: bool) {
        match flag {
            StyleFlag::Bold => self.bold = value,
            StyleFlag::Italic => self.italic = value,
            StyleFlag::Underline => self.underline = value,
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FONT_SIZE, FONT_FAMILIES[0])
    }
}

/// A partial style update. `None` fields leave the target untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDelta {
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
}

impl StyleDelta {
    /// Set the font size field.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font family field.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set one of the togglable flag fields.
    pub fn with_flag(mut self, flag: StyleFlag, value: bool) -> Self {
        match flag {
            StyleFlag::Bold => self.bold = Some(value),
            StyleFlag::Italic => self.italic = Some(value),
            StyleFlag::Underline => self.underline = Some(value),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleSet::default();
        assert_eq!(style.font_size, StyleSet::DEFAULT_FONT_SIZE);
        assert_eq!(style.font_family, "Arial");
        assert!(!style.bold);
        assert!(!style.italic);
        assert!(!style.underline);
    }

    #[test]
    fn test_merge_is_partial() {
        let style = StyleSet::new(20, "Verdana");
        let merged = style.merged(&StyleDelta::default().with_flag(StyleFlag::Bold, true));

        assert!(merged.bold);
        assert_eq!(merged.font_size, 20);
        assert_eq!(merged.font_family, "Verdana");
        assert!(!merged.italic);
        assert!(!merged.underline);
    }

    #[test]
    fn test_merge_empty_delta_is_identity() {
        let style = StyleSet::new(12, "Georgia");
        assert_eq!(style.merged(&StyleDelta::default()), style);
    }

    #[test]
    fn test_merge_overwrites_provided_fields() {
        let style = StyleSet::default();
        let merged = style.merged(
            &StyleDelta::default()
                .with_font_size(24)
                .with_font_family("Courier New"),
        );
        assert_eq!(merged.font_size, 24);
        assert_eq!(merged.font_family, "Courier New");
    }

    #[test]
    fn test_flag_accessors() {
        let mut style = StyleSet::default();
        for &flag in StyleFlag::all() {
            assert!(!style.flag(flag));
            style.set_flag(flag, true);
            assert!(style.flag(flag));
        }
    }
}
