//! Window management subsystem
//!
//! A [`WindowHandle`] is a shared, reference-counted view of one native
//! GLFW window plus its input snapshot store. Handles come in two flavors:
//!
//! - **attached** — created through `Platform::create_window`; operations
//!   pass straight through to the native window
//! - **detached** — the invalid/empty window value, returned when native
//!   creation fails; every query answers with defaults instead of
//!   panicking, so hosts can treat creation failure as a soft condition
//!
//! Cloning a handle shares the same native resource; the window is
//! destroyed exactly once, when the last clone drops.

pub mod handle;

pub use handle::WindowHandle;

pub(crate) use handle::NativeWindow;
