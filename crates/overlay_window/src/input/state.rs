//! Input snapshot value types

/// State of the primary mouse button and cursor at a point in time
///
/// Only the primary button is tracked; the target form factor (touch
/// screens, single-button pointing devices) has no secondary button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseButtonState {
    /// Whether the primary button is currently held down
    pub left_button_down: bool,
    /// Cursor position as of the last position query
    pub position: (f32, f32),
}

/// Keys currently held down, by identifier
///
/// Identifiers are lowercase single letters (`"a"`..`"z"`) plus the literal
/// `"ESCAPE"`. Each identifier appears at most once; insertion order is
/// preserved but carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardState {
    /// Identifiers of keys currently held down
    pub pressed: Vec<String>,
}

impl KeyboardState {
    /// Check whether the key with the given identifier is held down
    pub fn is_pressed(&self, identifier: &str) -> bool {
        self.pressed.iter().any(|id| id == identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_state_defaults_to_released_at_origin() {
        let state = MouseButtonState::default();
        assert!(!state.left_button_down);
        assert_eq!(state.position, (0.0, 0.0));
    }

    #[test]
    fn test_keyboard_state_defaults_to_empty() {
        let state = KeyboardState::default();
        assert!(state.pressed.is_empty());
        assert!(!state.is_pressed("a"));
    }

    #[test]
    fn test_is_pressed_matches_exact_identifier() {
        let state = KeyboardState {
            pressed: vec!["a".to_string(), "ESCAPE".to_string()],
        };
        assert!(state.is_pressed("a"));
        assert!(state.is_pressed("ESCAPE"));
        assert!(!state.is_pressed("b"));
        assert!(!state.is_pressed("escape"));
    }
}
