//! Window event handlers.

use tauri::{Window, WindowEvent};

use super::window::WIDGET_LABEL;

/// Handle window events for the application.
///
/// Called from the Tauri builder's `on_window_event` hook. The widget window
/// closes without ceremony; its destruction is only logged so the lifecycle
/// is traceable.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    if let WindowEvent::Destroyed = event {
        if window.label() == WIDGET_LABEL {
            log::debug!("[LIFECYCLE] widget window destroyed");
        }
    }
}
