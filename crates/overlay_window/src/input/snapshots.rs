//! Double-buffered input snapshot store

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::input::state::{KeyboardState, MouseButtonState};

/// Current/previous pair for one logical state group.
///
/// `previous` is only ever written wholesale from `current` by an advance
/// call; event application never touches it.
struct StatePair<T> {
    current: T,
    previous: T,
}

/// Thread-safe current/previous snapshots of mouse and keyboard state
///
/// The polling thread feeds the current snapshots through the mutators;
/// consumers on any thread copy snapshots out and decide when the previous
/// snapshot advances. One mutex guards each state group, no operation takes
/// both, and every accessor copies out under the lock so callers never hold
/// a lock while using the returned value. Lock hold time is a field copy or
/// a small list scan.
pub struct InputSnapshots {
    mouse: Mutex<StatePair<MouseButtonState>>,
    keyboard: Mutex<StatePair<KeyboardState>>,
}

impl InputSnapshots {
    /// Create a store with both snapshot pairs zeroed
    pub fn new() -> Self {
        Self {
            mouse: Mutex::new(StatePair {
                current: MouseButtonState::default(),
                previous: MouseButtonState::default(),
            }),
            keyboard: Mutex::new(StatePair {
                current: KeyboardState::default(),
                previous: KeyboardState::default(),
            }),
        }
    }

    // The guarded data is a plain value pair, so a panic elsewhere cannot
    // leave it logically inconsistent; recover poisoned locks.
    fn mouse_pair(&self) -> MutexGuard<'_, StatePair<MouseButtonState>> {
        self.mouse.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn keyboard_pair(&self) -> MutexGuard<'_, StatePair<KeyboardState>> {
        self.keyboard.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current mouse snapshot
    pub fn current_mouse_state(&self) -> MouseButtonState {
        self.mouse_pair().current
    }

    /// Copy of the mouse snapshot as of the last [`advance_mouse`] call
    ///
    /// [`advance_mouse`]: Self::advance_mouse
    pub fn previous_mouse_state(&self) -> MouseButtonState {
        self.mouse_pair().previous
    }

    /// Clone of the current keyboard snapshot
    pub fn current_keyboard_state(&self) -> KeyboardState {
        self.keyboard_pair().current.clone()
    }

    /// Clone of the keyboard snapshot as of the last [`advance_keyboard`] call
    ///
    /// [`advance_keyboard`]: Self::advance_keyboard
    pub fn previous_keyboard_state(&self) -> KeyboardState {
        self.keyboard_pair().previous.clone()
    }

    /// Overwrite the previous mouse snapshot with the current one
    pub fn advance_mouse(&self) {
        let mut pair = self.mouse_pair();
        let current = pair.current;
        pair.previous = current;
    }

    /// Overwrite the previous keyboard snapshot with the current one
    pub fn advance_keyboard(&self) {
        let mut pair = self.keyboard_pair();
        let current = pair.current.clone();
        pair.previous = current;
    }

    /// Record a primary-button transition in the current mouse snapshot
    pub fn set_left_button(&self, down: bool) {
        self.mouse_pair().current.left_button_down = down;
    }

    /// Latch an OS-queried cursor position into the current mouse snapshot
    pub fn record_cursor_position(&self, x: f64, y: f64) {
        self.mouse_pair().current.position = (x as f32, y as f32);
    }

    /// Mark a key as held in the current keyboard snapshot
    ///
    /// Pressing an already-held key leaves the list unchanged, so OS
    /// key-repeat cannot accumulate duplicate identifiers.
    pub fn press_key(&self, identifier: &str) {
        let mut pair = self.keyboard_pair();
        if !pair.current.is_pressed(identifier) {
            pair.current.pressed.push(identifier.to_string());
        }
    }

    /// Remove the first matching identifier from the current keyboard
    /// snapshot, if present
    pub fn release_key(&self, identifier: &str) {
        let mut pair = self.keyboard_pair();
        if let Some(index) = pair.current.pressed.iter().position(|id| id == identifier) {
            pair.current.pressed.remove(index);
        }
    }
}

impl Default for InputSnapshots {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_left_button_tracks_latest_transition() {
        let input = InputSnapshots::new();
        assert!(!input.current_mouse_state().left_button_down);

        input.set_left_button(true);
        assert!(input.current_mouse_state().left_button_down);

        input.set_left_button(false);
        assert!(!input.current_mouse_state().left_button_down);

        input.set_left_button(true);
        input.set_left_button(true);
        assert!(input.current_mouse_state().left_button_down);
    }

    #[test]
    fn test_advance_mouse_is_idempotent() {
        let input = InputSnapshots::new();
        input.set_left_button(true);

        input.advance_mouse();
        assert_eq!(input.previous_mouse_state(), input.current_mouse_state());

        input.advance_mouse();
        assert_eq!(input.previous_mouse_state(), input.current_mouse_state());
    }

    #[test]
    fn test_previous_mouse_lags_until_next_advance() {
        let input = InputSnapshots::new();

        input.set_left_button(true);
        assert!(input.current_mouse_state().left_button_down);
        assert!(!input.previous_mouse_state().left_button_down);

        input.advance_mouse();
        assert!(input.previous_mouse_state().left_button_down);

        input.set_left_button(false);
        assert!(!input.current_mouse_state().left_button_down);
        assert!(input.previous_mouse_state().left_button_down);

        input.advance_mouse();
        assert!(!input.previous_mouse_state().left_button_down);
    }

    #[test]
    fn test_cursor_position_latches_into_current_only() {
        let input = InputSnapshots::new();
        input.record_cursor_position(3.5, 4.25);

        assert_eq!(input.current_mouse_state().position, (3.5, 4.25));
        assert_eq!(input.previous_mouse_state().position, (0.0, 0.0));

        input.advance_mouse();
        assert_eq!(input.previous_mouse_state().position, (3.5, 4.25));
    }

    #[test]
    fn test_letter_press_release_round_trip() {
        let input = InputSnapshots::new();

        input.press_key("a");
        assert_eq!(input.current_keyboard_state().pressed, vec!["a"]);

        input.release_key("a");
        assert!(input.current_keyboard_state().pressed.is_empty());
    }

    // Held keys are deduplicated on press rather than reproducing the
    // append-on-every-press behavior: release removes only the first match,
    // so duplicate entries would go stale after one release.
    #[test]
    fn test_press_is_deduplicated_while_held() {
        let input = InputSnapshots::new();

        input.press_key("a");
        input.press_key("a");
        assert_eq!(input.current_keyboard_state().pressed, vec!["a"]);

        input.release_key("a");
        assert!(input.current_keyboard_state().pressed.is_empty());
    }

    #[test]
    fn test_release_removes_first_match_and_ignores_missing() {
        let input = InputSnapshots::new();

        input.press_key("a");
        input.press_key("b");
        input.release_key("a");
        assert_eq!(input.current_keyboard_state().pressed, vec!["b"]);

        input.release_key("z");
        assert_eq!(input.current_keyboard_state().pressed, vec!["b"]);
    }

    #[test]
    fn test_escape_uses_literal_identifier() {
        let input = InputSnapshots::new();

        input.press_key("ESCAPE");
        assert!(input.current_keyboard_state().is_pressed("ESCAPE"));

        input.release_key("ESCAPE");
        assert!(!input.current_keyboard_state().is_pressed("ESCAPE"));
    }

    #[test]
    fn test_advance_keyboard_copies_wholesale() {
        let input = InputSnapshots::new();

        input.press_key("a");
        input.press_key("b");
        assert!(input.previous_keyboard_state().pressed.is_empty());

        input.advance_keyboard();
        assert_eq!(input.previous_keyboard_state().pressed, vec!["a", "b"]);

        input.release_key("a");
        assert_eq!(input.current_keyboard_state().pressed, vec!["b"]);
        assert_eq!(input.previous_keyboard_state().pressed, vec!["a", "b"]);
    }

    #[test]
    fn test_store_is_shared_across_threads() {
        let input = Arc::new(InputSnapshots::new());

        let feeder = Arc::clone(&input);
        let handle = thread::spawn(move || {
            feeder.set_left_button(true);
            feeder.press_key("w");
        });
        handle.join().expect("feeder thread panicked");

        assert!(input.current_mouse_state().left_button_down);
        assert!(input.current_keyboard_state().is_pressed("w"));
    }
}
