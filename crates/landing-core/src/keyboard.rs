/// What a keydown means for site navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CloseMenu,
    FocusPrev,
    FocusNext,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::CloseMenu),
        "ArrowLeft" => Some(KeyAction::FocusPrev),
        "ArrowRight" => Some(KeyAction::FocusNext),
        _ => None,
    }
}

/// Index of the link to focus after a Prev/Next move from `current`,
/// wrapping at both ends. `None` when there is nothing to cycle.
#[inline]
pub fn cycle_focus(current: usize, len: usize, action: KeyAction) -> Option<usize> {
    if len == 0 || current >= len {
        return None;
    }
    match action {
        KeyAction::FocusPrev => Some((current + len - 1) % len),
        KeyAction::FocusNext => Some((current + 1) % len),
        KeyAction::CloseMenu => None,
    }
}
