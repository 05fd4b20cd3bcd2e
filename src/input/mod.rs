//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> KeyRegistry::dispatch() -> NavEvent -> App::handle()
//! ```
//!
//! - [`keybindings`] - default key table
//! - [`registry`] - [`KeyRegistry`] for resolving key events per screen

pub mod keybindings;
pub mod registry;

pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::KeyRegistry;
