//! Colors - Slate Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Energizer Rad color palette - All colors are accessed via associated functions
pub struct RadColors;

impl RadColors {
    // Page
    /// Page background (slate-200)
    pub fn background() -> Rgba { rgb(0xe2e8f0) }
    /// Heading text (slate-900)
    pub fn text_heading() -> Rgba { rgb(0x0f172a) }
    /// Body text (slate-600)
    pub fn text_body() -> Rgba { rgb(0x475569) }
    /// Footer text (slate-700)
    pub fn text_footer() -> Rgba { rgb(0x334155) }

    // Buttons
    /// Button background (slate-900)
    pub fn button_bg() -> Rgba { rgb(0x0f172a) }
    /// Button hover background (slate-800)
    pub fn button_hover_bg() -> Rgba { rgb(0x1e293b) }
    /// Button text (slate-50)
    pub fn button_text() -> Rgba { rgb(0xf8fafc) }

    // Modal
    /// Backdrop (black, 50%)
    pub fn backdrop() -> Rgba { rgba(0x00000080) }
    /// Modal card (slate-100)
    pub fn modal_bg() -> Rgba { rgb(0xf1f5f9) }

    // Wheel
    /// Segment backgrounds, alternating
    pub fn wheel_segments() -> [Rgba; 2] { [rgb(0x0f172a), rgb(0xf1f5f9)] }
    /// Segment label colors, alternating with `wheel_segments`
    pub fn wheel_labels() -> [Rgba; 2] { [rgb(0xf1f5f9), rgb(0x0f172a)] }
    /// Rim and pointer
    pub fn wheel_rim() -> Rgba { rgb(0x334155) }
    pub fn pointer() -> Rgba { rgb(0xef4444) }
}
