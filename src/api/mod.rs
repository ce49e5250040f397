//! Browser bindings. Everything here touches web-sys and only builds for wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm;
