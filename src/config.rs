//! Fixed widget window configuration.
//!
//! Nothing about the window is user-configurable: every attribute is a
//! literal decided at build time and never mutated after creation. The
//! struct exists so the builder call, logging and tests read one source.

use serde::{Deserialize, Serialize};

/// The fixed configuration of the widget window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    /// Logical width in pixels.
    pub width: f64,
    /// Logical height in pixels.
    pub height: f64,
    /// Window chrome (title bar, borders).
    pub decorations: bool,
    /// Transparent window background.
    pub transparent: bool,
    /// Keep the window above all others.
    pub always_on_top: bool,
    /// Allow the user to resize the window.
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 400.0,
            decorations: false,
            transparent: true,
            always_on_top: true,
            resizable: false,
        }
    }
}
