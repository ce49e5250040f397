//! Console logging
//!
//! On wasm32 these go to `console.log` / `console.error` through web-sys. Native builds
//! (tests, tooling) print to stderr instead, since calling wasm imports there aborts.

#[doc(hidden)]
pub fn write_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}

#[doc(hidden)]
pub fn write_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("error: {message}");
}

/// `println!`-style `console.log`
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::core::log::write_log(&format!($($t)*)))
}

/// `println!`-style `console.error`
#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => ($crate::core::log::write_error(&format!($($t)*)))
}
