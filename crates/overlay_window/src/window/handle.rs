//! High-level window handle
//!
//! The handle mediates all property access on the native window and owns
//! the window's input snapshot store. Native-window operations must stay on
//! the thread that created the window (a GLFW constraint), which is why the
//! handle shares its state through `Rc`; the snapshot store alone crosses
//! threads, through [`WindowHandle::input`].

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::input::{InputSnapshots, KeyboardState, MouseButtonState};

/// The native window resource and its event stream.
///
/// Held behind `Rc` so every handle clone shares one resource; dropping the
/// last clone destroys the GLFW window.
pub(crate) struct NativeWindow {
    pub(crate) window: RefCell<glfw::PWindow>,
    pub(crate) events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    pub(crate) input: Arc<InputSnapshots>,
}

/// Shared handle to one native window and its input snapshot store
///
/// Copies of a handle refer to the same underlying window, so mutators take
/// `&self`. A handle without a native window (see [`detached`]) answers
/// every query with defaults.
///
/// [`detached`]: Self::detached
#[derive(Clone)]
pub struct WindowHandle {
    native: Option<Rc<NativeWindow>>,
    input: Arc<InputSnapshots>,
}

impl WindowHandle {
    pub(crate) fn from_native(native: Rc<NativeWindow>) -> Self {
        Self {
            input: Arc::clone(&native.input),
            native: Some(native),
        }
    }

    /// The invalid/empty window value
    ///
    /// Native operations on it are no-ops or return defaults; its snapshot
    /// store exists but is never fed by the platform.
    pub fn detached() -> Self {
        Self {
            native: None,
            input: Arc::new(InputSnapshots::new()),
        }
    }

    /// Whether a native window is attached to this handle
    pub fn is_valid(&self) -> bool {
        self.native.is_some()
    }

    /// True once the user or system has requested termination
    pub fn should_close(&self) -> bool {
        self.native
            .as_ref()
            .is_some_and(|native| native.window.borrow().should_close())
    }

    /// Programmatically request (or cancel) window closure
    pub fn set_should_close(&self, value: bool) {
        if let Some(native) = &self.native {
            native.window.borrow_mut().set_should_close(value);
        }
    }

    /// Toggle the OS chrome (title bar and border) on the live window
    pub fn set_decorated(&self, visible: bool) {
        if let Some(native) = &self.native {
            native.window.borrow_mut().set_decorated(visible);
        }
    }

    /// Screen position of the window's top-left corner
    pub fn get_position(&self) -> (i32, i32) {
        self.native
            .as_ref()
            .map_or((0, 0), |native| native.window.borrow().get_pos())
    }

    /// Move the window's top-left corner to the given screen coordinates
    pub fn set_position(&self, left: i32, top: i32) {
        if let Some(native) = &self.native {
            native.window.borrow_mut().set_pos(left, top);
        }
    }

    /// Client-area size in pixels
    pub fn get_size(&self) -> (u32, u32) {
        self.native.as_ref().map_or((0, 0), |native| {
            let (width, height) = native.window.borrow().get_size();
            (width as u32, height as u32)
        })
    }

    /// Query the OS cursor position, latching it into the current mouse
    /// snapshot as a side effect
    pub fn mouse_position(&self) -> (f32, f32) {
        match &self.native {
            Some(native) => {
                let (x, y) = native.window.borrow().get_cursor_pos();
                self.input.record_cursor_position(x, y);
                (x as f32, y as f32)
            }
            None => (0.0, 0.0),
        }
    }

    /// Copy of the current mouse snapshot
    pub fn current_mouse_state(&self) -> MouseButtonState {
        self.input.current_mouse_state()
    }

    /// Copy of the mouse snapshot as of the last [`advance_mouse`] call
    ///
    /// [`advance_mouse`]: Self::advance_mouse
    pub fn previous_mouse_state(&self) -> MouseButtonState {
        self.input.previous_mouse_state()
    }

    /// Clone of the current keyboard snapshot
    pub fn current_keyboard_state(&self) -> KeyboardState {
        self.input.current_keyboard_state()
    }

    /// Clone of the keyboard snapshot as of the last [`advance_keyboard`] call
    ///
    /// [`advance_keyboard`]: Self::advance_keyboard
    pub fn previous_keyboard_state(&self) -> KeyboardState {
        self.input.previous_keyboard_state()
    }

    /// Overwrite the previous mouse snapshot with the current one
    pub fn advance_mouse(&self) {
        self.input.advance_mouse();
    }

    /// Overwrite the previous keyboard snapshot with the current one
    pub fn advance_keyboard(&self) {
        self.input.advance_keyboard();
    }

    /// Shared, thread-safe handle to this window's snapshot store
    ///
    /// The returned store may be read and advanced from any thread and may
    /// outlive the window handle that produced it.
    pub fn input(&self) -> Arc<InputSnapshots> {
        Arc::clone(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_window_reports_defaults() {
        let window = WindowHandle::detached();
        assert!(!window.is_valid());
        assert!(!window.should_close());
        assert_eq!(window.get_position(), (0, 0));
        assert_eq!(window.get_size(), (0, 0));
        assert_eq!(window.mouse_position(), (0.0, 0.0));
    }

    #[test]
    fn test_detached_window_mutators_are_noops() {
        let window = WindowHandle::detached();
        window.set_should_close(true);
        window.set_decorated(false);
        window.set_position(100, 100);
        assert!(!window.should_close());
        assert_eq!(window.get_position(), (0, 0));
    }

    #[test]
    fn test_detached_window_still_owns_a_snapshot_store() {
        let window = WindowHandle::detached();
        assert!(!window.current_mouse_state().left_button_down);
        assert!(window.current_keyboard_state().pressed.is_empty());
        assert!(window.previous_keyboard_state().pressed.is_empty());
    }

    #[test]
    fn test_clones_share_one_snapshot_store() {
        let window = WindowHandle::detached();
        let copy = window.clone();

        window.input().press_key("a");
        assert_eq!(copy.current_keyboard_state().pressed, vec!["a"]);

        copy.advance_keyboard();
        assert_eq!(window.previous_keyboard_state().pressed, vec!["a"]);
    }
}
