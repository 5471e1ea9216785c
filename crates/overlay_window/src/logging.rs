//! Logging setup shared by the workspace binaries

pub use log::{debug, error, info, trace, warn};

/// Install the process-wide logger
///
/// Binaries call this once at startup; the library itself only emits
/// through the `log` facade.
pub fn init() {
    env_logger::init();
}
