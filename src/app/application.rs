//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px,
};

use crate::app::workspace::Workspace;
use crate::constants::text;
use crate::domain::config::AppConfig;
use crate::helpers::action::{Quit, bind_keys};

/// Run the Energizer Rad application
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        bind_keys(cx);

        // Quit the app when the window is closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(text::WINDOW_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(&config, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
