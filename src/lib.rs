//! Perch is a fixed-size, transparent, always-on-top desktop widget shell.
//!
//! The whole application is a window lifecycle controller: create the single
//! widget window once the runtime is ready, recreate it on macOS reactivation
//! if it was closed, and quit when the last window closes on every other
//! platform. There are no commands, no settings and no persisted state.

pub mod app;
pub mod config;
pub mod error;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();

    tauri::Builder::default()
        .on_window_event(app::events::handle_window_event)
        .setup(|app| {
            // Application ready: bring the widget window into existence.
            // A failure here aborts startup.
            app::window::create_widget_window(app.handle())?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while running tauri application")
        .run(app::lifecycle::handle_run_event);
}
