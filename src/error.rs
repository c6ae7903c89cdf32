//! Central error types for Perch.

use thiserror::Error;

/// Main error type for Perch operations.
#[derive(Error, Debug)]
pub enum PerchError {
    /// Window or webview creation failed
    #[error("Window error: {0}")]
    Window(#[from] tauri::Error),
}
