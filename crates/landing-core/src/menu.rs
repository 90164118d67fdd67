//! Mobile navigation menu state and the inline styles it applies.

use crate::keyboard::KeyAction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after a navigation key. Escape always lands on Closed; focus
    /// moves leave the menu alone.
    pub fn apply(self, action: KeyAction) -> Self {
        match action {
            KeyAction::CloseMenu => MenuState::Closed,
            KeyAction::FocusPrev | KeyAction::FocusNext => self,
        }
    }
}

/// Inline overrides on the nav-links panel while the menu is open.
pub const NAV_PANEL_OPEN_STYLE: &[(&str, &str)] = &[
    ("display", "flex"),
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("right", "0"),
    ("flex-direction", "column"),
    ("background", "var(--surface-color)"),
    ("border", "1px solid var(--border-color)"),
    ("border-radius", "0.5rem"),
    ("padding", "1rem"),
    ("gap", "1rem"),
    ("box-shadow", "var(--shadow-lg)"),
];

/// Per-bar overrides that fold the three-bar icon into an "X".
pub const MENU_BARS_OPEN_STYLE: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translate(6px, 6px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(6px, -6px)"),
];
