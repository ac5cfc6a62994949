//! Modal Component
//!
//! A centered card over a dimmed backdrop. Clicking the backdrop closes the
//! modal; clicks inside the card do not reach the backdrop.

use gpui::{
    AnyElement, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::constants::{MODAL_HEIGHT, MODAL_WIDTH};
use crate::theme::colors::RadColors;
use crate::theme::typography::Typography;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    actions: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            actions: Vec::new(),
            on_close: None,
        }
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add an element to the action row
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.actions.push(action.into_any_element());
        self
    }

    /// Set the handler for backdrop clicks
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(RadColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .when_some(on_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, _window, cx| {
                    handler(cx);
                })
            })
            .child(
                // Card
                div()
                    .id("modal-card")
                    .bg(RadColors::modal_bg())
                    .rounded_md()
                    .shadow_lg()
                    .w(px(MODAL_WIDTH))
                    .h(px(MODAL_HEIGHT))
                    .p_4()
                    .flex()
                    .flex_col()
                    .justify_between()
                    .on_click(|_event: &ClickEvent, _window, cx| {
                        cx.stop_propagation();
                    })
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(RadColors::text_heading())
                            .child(self.title),
                    )
                    .child(
                        div()
                            .text_color(RadColors::text_body())
                            .children(self.children),
                    )
                    .child(div().flex().gap_2().children(self.actions)),
            )
    }
}
