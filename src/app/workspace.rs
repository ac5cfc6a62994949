//! Workspace - Page Shell
//!
//! Frames the page with heading, instructions and footer, and mounts the
//! wheel page once.

use gpui::{AppContext, Context, Entity, IntoElement, Render, Window};

use crate::components::layout::shell::Shell;
use crate::domain::config::AppConfig;
use crate::features::wheel::page::WheelPage;

/// Main workspace containing the page layout
pub struct Workspace {
    wheel_page: Entity<WheelPage>,
}

impl Workspace {
    pub fn new(config: &AppConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let wheel = config.wheel.clone();
        let celebration = config.celebration.clone();
        let wheel_page = cx.new(|cx| WheelPage::new(wheel, celebration, window, cx));

        Self { wheel_page }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        Shell::new().child(self.wheel_page.clone())
    }
}
