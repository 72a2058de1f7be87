//! Console logging helpers.
//!
//! Thin wrappers over `web_sys::console` so callers don't repeat the
//! `JsValue` conversion. On non-wasm targets (unit tests) messages go to
//! stderr instead, since the console bindings only exist in the browser.

/// Log a warning.
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warn: {}", msg);
}

/// Log an error.
pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("error: {}", msg);
}
