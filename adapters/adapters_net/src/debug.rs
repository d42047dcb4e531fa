//! Networking Debug Output
//!
//! Gated diagnostic output for the networking natives. Transport failures
//! are logged to stderr when debugging is enabled and suppressed otherwise,
//! so the status-code contract stays the only production-visible signal.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global debug state
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Debug output for the networking natives
pub struct NetDebug;

impl NetDebug {
    /// Enable debug output
    ///
    /// When enabled, transport failures are reported on stderr.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adapters_net::NetDebug;
    ///
    /// NetDebug::enable();
    /// NetDebug::log("this will be printed");
    /// NetDebug::disable();
    /// NetDebug::log("this will be suppressed");
    /// ```
    pub fn enable() {
        DEBUG_ENABLED.store(true, Ordering::Release);
    }

    /// Disable debug output
    pub fn disable() {
        DEBUG_ENABLED.store(false, Ordering::Release);
    }

    /// Check if debug output is enabled
    pub fn is_enabled() -> bool {
        DEBUG_ENABLED.load(Ordering::Acquire)
    }

    /// Write a diagnostic line if debug output is enabled
    pub fn log(message: &str) {
        if Self::is_enabled() {
            eprintln!("[net] {}", message);
        }
    }
}
