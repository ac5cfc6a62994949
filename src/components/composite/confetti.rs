//! Confetti Component
//!
//! Full-window overlay drawing a `ConfettiField` snapshot. Mouse input
//! passes through.

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px, rgb};

use crate::domain::confetti::{ConfettiField, Particle};

/// Confetti overlay
#[derive(IntoElement)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn new(field: &ConfettiField) -> Self {
        Self {
            particles: field.particles().to_vec(),
        }
    }
}

impl RenderOnce for Confetti {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .absolute()
            .inset_0()
            .overflow_hidden()
            .children(self.particles.into_iter().map(|p| {
                div()
                    .absolute()
                    .left(px(p.x))
                    .top(px(p.y))
                    .w(px(p.width))
                    .h(px(p.height))
                    .bg(rgb(p.color))
            }))
    }
}
