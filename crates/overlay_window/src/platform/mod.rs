//! Platform lifecycle and event dispatch
//!
//! GLFW must be initialized exactly once before any window is created and
//! terminated exactly once at shutdown. Instead of tracking that with a
//! process-global flag, the whole lifecycle lives in a single [`Platform`]
//! value: windows can only be created from a live platform, and dropping it
//! ends the windowing session.

use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use thiserror::Error;

use crate::config::WindowConfig;
use crate::input::processor;
use crate::input::InputSnapshots;
use crate::window::{NativeWindow, WindowHandle};

/// Platform lifecycle errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The native library refused to create a window
    #[error("window creation failed")]
    CreationFailed,
}

/// Owns the GLFW instance and dispatches polled events to windows
///
/// Create one per process, on the thread that will poll events. Every
/// window created through [`create_window`] is registered here, and each
/// [`poll_events`] call pumps the native event loop and plays the pending
/// events into the registered windows' snapshot stores.
///
/// [`create_window`]: Self::create_window
/// [`poll_events`]: Self::poll_events
pub struct Platform {
    glfw: glfw::Glfw,
    windows: Vec<Weak<NativeWindow>>,
}

impl Platform {
    /// Initialize the underlying windowing library
    ///
    /// On failure a one-line diagnostic is written to `diagnostics` and
    /// [`PlatformError::InitializationFailed`] is returned; the caller must
    /// not attempt window creation.
    pub fn init(diagnostics: &mut dyn Write) -> Result<Self, PlatformError> {
        match glfw::init(glfw::fail_on_errors) {
            Ok(glfw) => {
                log::info!("GLFW initialized");
                Ok(Self {
                    glfw,
                    windows: Vec::new(),
                })
            }
            Err(err) => {
                let _ = writeln!(diagnostics, "GLFW initialization failed: {}", err);
                Err(PlatformError::InitializationFailed)
            }
        }
    }

    /// Create a native window configured as an overlay surface
    ///
    /// A non-opaque window gets a transparent framebuffer and no OS chrome;
    /// `click_through` additionally lets mouse events fall through to the
    /// windows beneath. The new window is registered as a target of
    /// subsequent event dispatch.
    ///
    /// If the native library refuses the window, the failure is logged and
    /// a detached handle is returned; all operations on it are no-ops or
    /// return defaults.
    pub fn create_window(&mut self, config: &WindowConfig) -> WindowHandle {
        // No rendering context; this layer only owns the window resource.
        self.glfw
            .window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        if config.opaque {
            self.glfw.window_hint(glfw::WindowHint::Decorated(true));
        } else {
            self.glfw
                .window_hint(glfw::WindowHint::TransparentFramebuffer(true));
            self.glfw.window_hint(glfw::WindowHint::Decorated(false));
        }
        self.glfw
            .window_hint(glfw::WindowHint::MousePassthrough(config.click_through));
        self.glfw.window_hint(glfw::WindowHint::ScaleToMonitor(true));
        self.glfw
            .window_hint(glfw::WindowHint::CocoaRetinaFramebuffer(true));

        let (mut window, events) = match self.glfw.create_window(
            config.width,
            config.height,
            &config.title,
            glfw::WindowMode::Windowed,
        ) {
            Some(pair) => pair,
            None => {
                log::error!(
                    "{}: {}x{} \"{}\"",
                    PlatformError::CreationFailed,
                    config.width,
                    config.height,
                    config.title
                );
                return WindowHandle::detached();
            }
        };

        window.set_mouse_button_polling(true);
        window.set_key_polling(true);
        window.set_close_polling(true);

        log::info!(
            "Created {}x{} window \"{}\" (opaque: {}, click-through: {})",
            config.width,
            config.height,
            config.title,
            config.opaque,
            config.click_through
        );

        let native = Rc::new(NativeWindow {
            window: RefCell::new(window),
            events,
            input: Arc::new(InputSnapshots::new()),
        });
        self.windows.push(Rc::downgrade(&native));
        WindowHandle::from_native(native)
    }

    /// Pump the native event loop once and apply every pending event to the
    /// registered windows' snapshot stores
    ///
    /// Input mutation happens here, synchronously, on the polling thread;
    /// consumers read the stores from wherever they like. Registrations for
    /// windows that have since been dropped are pruned.
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();

        self.windows.retain(|slot| match slot.upgrade() {
            Some(native) => {
                for (_, event) in glfw::flush_messages(&native.events) {
                    processor::apply_window_event(&native.input, &event);
                }
                true
            }
            None => false,
        });
    }

    /// Explicitly terminate the windowing platform
    ///
    /// Equivalent to dropping the value; present so hosts can make shutdown
    /// ordering visible at the call site. Windows must be dropped first.
    pub fn shutdown(self) {}
}

impl Drop for Platform {
    fn drop(&mut self) {
        log::info!("Shutting down windowing platform");
    }
}
