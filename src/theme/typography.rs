//! Typography - Font Sizes

use crate::domain::energizer::FontHint;

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_4XL: f32 = 36.0;

    /// Wheel label sizes
    pub const WHEEL_LABEL: f32 = 18.0;
    pub const WHEEL_LABEL_SMALL: f32 = 10.0;

    /// Wheel label size for a font hint
    pub fn wheel_label(hint: FontHint) -> f32 {
        match hint {
            FontHint::Normal => Self::WHEEL_LABEL,
            FontHint::Small => Self::WHEEL_LABEL_SMALL,
        }
    }
}
