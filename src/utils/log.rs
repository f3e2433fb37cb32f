//! Console logging.

/// Log a debug message to the browser console.
pub fn debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
