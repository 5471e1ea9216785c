//! Input snapshot subsystem
//!
//! Double-buffered mouse and keyboard state fed from the window event
//! stream. The polling thread mutates the *current* snapshots; consumers
//! copy snapshots out and advance the *previous* ones explicitly, so
//! "was just pressed this frame" falls out of comparing the two.
//!
//! # Module Organization
//!
//! - **`state`**: plain snapshot value types
//! - **`snapshots`**: the locked current/previous store
//! - **`processor`**: window-event application (polling-thread side)

pub mod snapshots;
pub mod state;

pub(crate) mod processor;

pub use snapshots::InputSnapshots;
pub use state::{KeyboardState, MouseButtonState};
