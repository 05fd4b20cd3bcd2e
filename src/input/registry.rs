//! Resolve terminal key events into navigation events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::{NavEvent, ViewKind};

/// Maps key events to [`NavEvent`]s for the active screen.
///
/// Lookup order:
/// 1. Ctrl+C (always quits)
/// 2. Global bindings
/// 3. Bindings of the active screen
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    config: KeybindingConfig,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` for unbound keys and for key releases.
    pub fn dispatch(&self, key: KeyEvent, kind: ViewKind) -> Option<NavEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(NavEvent::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers).normalized();
        self.config
            .get_global(&combo)
            .or_else(|| self.config.get_view(kind, &combo))
    }
}
