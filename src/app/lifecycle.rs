//! Run-loop lifecycle policy.
//!
//! Two platform-conditioned rules, applied from the Tauri run-loop callback:
//!
//! - activate (macOS dock-icon click): recreate the widget window when every
//!   window is gone, otherwise do nothing.
//! - all windows closed: quit, except on macOS where the app stays resident
//!   waiting for the next activate.
//!
//! The decisions are pure functions of the open-window count and the
//! platform so they can be tested without a display server.

use tauri::{AppHandle, RunEvent};

/// What the controller does in response to a lifecycle signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Bring the widget window (back) into existence.
    CreateWindow,
    /// Leave the window set alone.
    None,
}

/// Policy for an activate signal: recreate the window only when none is open.
pub fn on_activate(open_windows: usize) -> LifecycleAction {
    if open_windows == 0 {
        LifecycleAction::CreateWindow
    } else {
        LifecycleAction::None
    }
}

/// Policy for the last window closing: every platform quits except macOS,
/// where convention keeps the app resident until it is activated again.
pub fn stays_resident_on_all_closed(platform: &str) -> bool {
    platform == "macos"
}

/// Run-loop callback wired into `tauri::App::run`.
#[cfg_attr(not(target_os = "macos"), allow(unused_variables))]
pub fn handle_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        // Fires when the last window closes (code is None) or on an explicit
        // exit request (code is Some). Only the former is subject to the
        // platform policy.
        RunEvent::ExitRequested { code: None, api, .. } => {
            if stays_resident_on_all_closed(std::env::consts::OS) {
                log::debug!("[LIFECYCLE] all windows closed, staying resident");
                api.prevent_exit();
            } else {
                log::info!("[LIFECYCLE] all windows closed, exiting");
            }
        }

        // macOS dock-icon click.
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => reopen_widget(app),

        _ => {}
    }
}

/// Recreate the widget window if it was closed. A hidden-but-open window
/// still counts as open, so reactivation never stacks a second one.
#[cfg(target_os = "macos")]
fn reopen_widget(app: &AppHandle) {
    use tauri::Manager;

    if on_activate(app.webview_windows().len()) == LifecycleAction::CreateWindow {
        if let Err(e) = super::window::create_widget_window(app) {
            log::error!("[LIFECYCLE] failed to recreate widget window: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_with_no_windows_recreates() {
        assert_eq!(on_activate(0), LifecycleAction::CreateWindow);
    }

    #[test]
    fn activate_with_open_window_is_noop() {
        assert_eq!(on_activate(1), LifecycleAction::None);
        assert_eq!(on_activate(3), LifecycleAction::None);
    }

    #[test]
    fn repeated_activates_never_stack_windows() {
        // Replay the signal against the count it would have produced: once a
        // window exists, every further activate is a no-op.
        let mut open = 0usize;
        for _ in 0..10 {
            if on_activate(open) == LifecycleAction::CreateWindow {
                open += 1;
            }
        }
        assert_eq!(open, 1);
    }

    #[test]
    fn all_closed_quits_everywhere_but_macos() {
        assert!(stays_resident_on_all_closed("macos"));
        assert!(!stays_resident_on_all_closed("windows"));
        assert!(!stays_resident_on_all_closed("linux"));
    }

    #[test]
    fn resident_app_gets_its_window_back_on_activate() {
        // Launch: ready creates the window.
        let mut open = 1usize;

        // User closes it; on macOS the process stays resident.
        open -= 1;
        assert!(stays_resident_on_all_closed("macos"));

        // Dock-icon click brings it back, exactly once.
        if on_activate(open) == LifecycleAction::CreateWindow {
            open += 1;
        }
        assert_eq!(open, 1);
        assert_eq!(on_activate(open), LifecycleAction::None);
    }
}
