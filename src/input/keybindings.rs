//! Default keybindings for the application.
//!
//! Bindings map a key combination to a [`NavEvent`]. Global bindings apply
//! on every screen; view bindings only on the screen they are registered for.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use crate::app::{NavEvent, ViewKind};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Drop SHIFT where the key code already carries it.
    ///
    /// Terminals report `G` as `Char('G')` with SHIFT and BackTab with SHIFT
    /// on some platforms and without on others.
    pub fn normalized(self) -> Self {
        match self.code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                Self::new(self.code, self.modifiers.difference(KeyModifiers::SHIFT))
            }
            _ => self,
        }
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, NavEvent>,
    /// Keybindings per screen
    pub view: HashMap<ViewKind, HashMap<KeyCombo, NavEvent>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            view: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_view_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        let bindings = [
            (KeyCombo::plain(KeyCode::Esc), NavEvent::Quit),
            (KeyCombo::ctrl(KeyCode::Char('c')), NavEvent::Quit),
            (KeyCombo::char('q'), NavEvent::Quit),
            (KeyCombo::plain(KeyCode::Up), NavEvent::MoveUp),
            (KeyCombo::char('k'), NavEvent::MoveUp),
            (KeyCombo::plain(KeyCode::Down), NavEvent::MoveDown),
            (KeyCombo::char('j'), NavEvent::MoveDown),
            (KeyCombo::plain(KeyCode::PageUp), NavEvent::PageUp),
            (KeyCombo::plain(KeyCode::PageDown), NavEvent::PageDown),
            (KeyCombo::plain(KeyCode::Home), NavEvent::First),
            (KeyCombo::char('g'), NavEvent::First),
            (KeyCombo::plain(KeyCode::End), NavEvent::Last),
            (KeyCombo::char('G'), NavEvent::Last),
            (KeyCombo::plain(KeyCode::Enter), NavEvent::Activate),
            (KeyCombo::plain(KeyCode::Right), NavEvent::Activate),
            (KeyCombo::char('l'), NavEvent::Activate),
            (KeyCombo::char('H'), NavEvent::Home),
            (KeyCombo::char('r'), NavEvent::Reload),
            (KeyCombo::plain(KeyCode::Tab), NavEvent::FocusNext),
            (KeyCombo::plain(KeyCode::BackTab), NavEvent::FocusPrev),
        ];
        self.global.extend(bindings);
    }

    /// Back keys exist only where there is something to go back to.
    fn setup_view_bindings(&mut self) {
        let back = [
            (KeyCombo::plain(KeyCode::Backspace), NavEvent::Back),
            (KeyCombo::plain(KeyCode::Left), NavEvent::Back),
            (KeyCombo::char('h'), NavEvent::Back),
        ];
        for kind in [ViewKind::ThreadList, ViewKind::PostList] {
            self.view.insert(kind, HashMap::from(back));
        }
        self.view.entry(ViewKind::BoardList).or_default();
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<NavEvent> {
        self.global.get(combo).copied()
    }

    pub fn get_view(&self, kind: ViewKind, combo: &KeyCombo) -> Option<NavEvent> {
        self.view.get(&kind).and_then(|m| m.get(combo)).copied()
    }

    /// Key hints for the footer of `kind`.
    pub fn hints(kind: ViewKind) -> &'static [(&'static str, &'static str)] {
        match kind {
            ViewKind::BoardList => &[
                ("↑↓", "move"),
                ("Enter", "open"),
                ("r", "reload"),
                ("Tab", "focus"),
                ("q", "quit"),
            ],
            ViewKind::ThreadList => &[
                ("↑↓", "move"),
                ("Enter", "open"),
                ("←", "back"),
                ("H", "home"),
                ("r", "reload"),
                ("q", "quit"),
            ],
            ViewKind::PostList => &[
                ("↑↓", "scroll"),
                ("PgUp/PgDn", "page"),
                ("←", "back"),
                ("H", "home"),
                ("r", "reload"),
                ("q", "quit"),
            ],
        }
    }
}
