//! # Overlay Window
//!
//! A thin binding layer over GLFW for building transparent, click-through
//! overlay windows with double-buffered input snapshots.
//!
//! ## Features
//!
//! - **Overlay windows**: transparent framebuffer, no OS chrome, optional
//!   mouse passthrough to the windows beneath
//! - **Geometry passthrough**: position and size accessors that go straight
//!   to the native window
//! - **Input snapshots**: current/previous mouse and keyboard state, safe to
//!   read from any thread
//! - **Explicit lifecycle**: a single [`Platform`] value owns library
//!   initialization and termination
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use overlay_window::prelude::*;
//!
//! fn main() -> Result<(), PlatformError> {
//!     let mut platform = Platform::init(&mut std::io::stderr())?;
//!     let window = platform.create_window(
//!         &WindowConfig::new(640, 480).with_title("Overlay").with_opaque(false),
//!     );
//!
//!     while !window.should_close() {
//!         platform.poll_events();
//!         if window.current_keyboard_state().is_pressed("ESCAPE") {
//!             window.set_should_close(true);
//!         }
//!         window.advance_mouse();
//!         window.advance_keyboard();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod input;
pub mod logging;
pub mod platform;
pub mod window;

pub use config::{Config, ConfigError, WindowConfig};
pub use input::{InputSnapshots, KeyboardState, MouseButtonState};
pub use platform::{Platform, PlatformError};
pub use window::WindowHandle;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, WindowConfig},
        input::{InputSnapshots, KeyboardState, MouseButtonState},
        platform::{Platform, PlatformError},
        window::WindowHandle,
    };
}
