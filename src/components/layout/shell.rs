//! Shell Component
//!
//! Page chrome: heading and instructions on top, footer credit at the
//! bottom, page content in between.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px,
};

use crate::constants::{CONTENT_MAX_WIDTH, text};
use crate::theme::colors::RadColors;
use crate::theme::typography::Typography;

/// Page shell wrapper
#[derive(IntoElement)]
pub struct Shell {
    children: Vec<AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .justify_between()
            .p_4()
            .bg(RadColors::background())
            .text_color(RadColors::text_body())
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_4XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(RadColors::text_heading())
                            .child(text::HEADING),
                    )
                    .child(
                        div()
                            .max_w(px(CONTENT_MAX_WIDTH))
                            .text_size(px(Typography::TEXT_BASE))
                            .child(text::INSTRUCTIONS),
                    )
                    .children(self.children),
            )
            .child(
                div()
                    .ml_auto()
                    .text_color(RadColors::text_footer())
                    .child(text::FOOTER),
            )
    }
}
