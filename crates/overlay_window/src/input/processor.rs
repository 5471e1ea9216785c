//! Window-event application
//!
//! Translates GLFW window events into snapshot-store mutations. The `glfw`
//! crate surfaces the native input callbacks as buffered per-window events
//! drained during the poll call, so this module is the callback body: it
//! runs synchronously inside [`Platform::poll_events`] on the polling
//! thread.
//!
//! [`Platform::poll_events`]: crate::platform::Platform::poll_events

use glfw::{Action, Key, WindowEvent};

use crate::input::snapshots::InputSnapshots;

/// Map a key to its snapshot identifier.
///
/// Letters map to their lowercase character, escape to the literal
/// "ESCAPE". Everything else is untracked.
pub(crate) fn key_identifier(key: Key) -> Option<String> {
    let code = key as i32;
    if (Key::A as i32..=Key::Z as i32).contains(&code) {
        let offset = (code - Key::A as i32) as u8;
        Some(char::from(b'a' + offset).to_string())
    } else if key == Key::Escape {
        Some("ESCAPE".to_string())
    } else {
        None
    }
}

/// Apply one window event to a snapshot store.
///
/// Only primary-button transitions and tracked keys mutate state; repeat
/// actions never do (a held key is already in the pressed list).
pub(crate) fn apply_window_event(input: &InputSnapshots, event: &WindowEvent) {
    match event {
        WindowEvent::MouseButton(button, action, _) if *button == glfw::MouseButtonLeft => {
            match action {
                Action::Press => input.set_left_button(true),
                Action::Release => input.set_left_button(false),
                Action::Repeat => {}
            }
        }
        WindowEvent::Key(key, _, action, _) => {
            if let Some(identifier) = key_identifier(*key) {
                match action {
                    Action::Press => input.press_key(&identifier),
                    Action::Release => input.release_key(&identifier),
                    Action::Repeat => {}
                }
            }
        }
        _ => {}
    }
}
