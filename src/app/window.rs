//! Widget window construction.

use tauri::{AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::config::WindowConfig;
use crate::error::PerchError;

/// Widget window label
pub(crate) const WIDGET_LABEL: &str = "widget";

/// Document loaded into the widget window, relative to the frontend dist dir.
const WIDGET_CONTENT: &str = "index.html";

/// Bridge script injected into the webview before the document loads.
const BRIDGE_SCRIPT: &str = include_str!("../../ui/preload.js");

/// Create the widget window.
///
/// The configuration is a fixed literal ([`WindowConfig::default`]); nothing
/// about the window changes after creation. Errors propagate to the caller,
/// which treats them as fatal.
pub fn create_widget_window(app: &AppHandle) -> Result<WebviewWindow, PerchError> {
    let config = WindowConfig::default();
    let url = WebviewUrl::App(WIDGET_CONTENT.into());

    let window = WebviewWindowBuilder::new(app, WIDGET_LABEL, url)
        .title("Perch")
        .inner_size(config.width, config.height)
        .transparent(config.transparent)
        .decorations(config.decorations)
        .always_on_top(config.always_on_top)
        .resizable(config.resizable)
        .initialization_script(BRIDGE_SCRIPT)
        .build()?;

    log::info!(
        "[WINDOW] created widget window ({}x{})",
        config.width,
        config.height
    );

    Ok(window)
}
