//! Application lifecycle and platform integration.
//!
//! - `lifecycle`: run-loop policy (activate / all-windows-closed)
//! - `window`: widget window construction
//! - `events`: window event handlers

pub mod events;
pub mod lifecycle;
pub mod window;
