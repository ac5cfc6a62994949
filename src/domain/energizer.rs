//! Energizer - A Single Selectable Activity

use std::fmt;

use uuid::Uuid;

/// Stable identifier assigned to an energizer when the pool is seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display hint for the label on the wheel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontHint {
    #[default]
    Normal,
    /// Smaller font for long labels
    Small,
}

/// One selectable energizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Energizer {
    /// Identity used for removal
    pub id: ItemId,
    /// Text shown on the wheel and in the result modal
    pub label: String,
    /// Wheel label sizing
    pub font_hint: FontHint,
}

impl Energizer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            font_hint: FontHint::Normal,
        }
    }

    /// Set the font hint
    pub fn with_font_hint(mut self, font_hint: FontHint) -> Self {
        self.font_hint = font_hint;
        self
    }
}

/// Built-in energizers, in wheel order
pub const BUILT_IN: [(&str, FontHint); 4] = [
    ("Ninja", FontHint::Normal),
    ("Steen-papier-schaar toernooi", FontHint::Small),
    ("Gekke loopjes", FontHint::Normal),
    ("Stoelendans", FontHint::Normal),
];

/// Create the built-in energizer list with fresh identifiers
pub fn built_in() -> Vec<Energizer> {
    BUILT_IN
        .iter()
        .map(|(label, hint)| Energizer::new(*label).with_font_hint(*hint))
        .collect()
}
