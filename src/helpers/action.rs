//! Keyboard Actions and Shortcuts

use gpui::{App, KeyBinding, actions};

/// Key context of the wheel page
pub const WHEEL_CONTEXT: &str = "WheelPage";

actions!(energizer_rad, [Quit, Draw, CloseResult, ExcludeResult]);

/// Register global key bindings
pub fn bind_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("space", Draw, Some(WHEEL_CONTEXT)),
        KeyBinding::new("enter", Draw, Some(WHEEL_CONTEXT)),
        KeyBinding::new("escape", CloseResult, Some(WHEEL_CONTEXT)),
        KeyBinding::new("backspace", ExcludeResult, Some(WHEEL_CONTEXT)),
    ]);

    #[cfg(target_os = "macos")]
    cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);
    #[cfg(not(target_os = "macos"))]
    cx.bind_keys([KeyBinding::new("ctrl-q", Quit, None)]);
}
