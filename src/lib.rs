//! Cursor Explosion - click-triggered particle bursts on a canvas overlay, in WASM
//!
//! Architecture:
//! - core/        - Logging, randomness, easing, clock
//! - domain/      - Config, particles, shockwave ring
//! - animation/   - Tweens, bursts, render loop state
//! - dom/         - Filter, pointer, canvas and timer seams (no web-sys)
//! - controller/  - The explosion controller
//! - api/         - web-sys bindings (wasm32 only)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod animation;
pub mod dom;
pub mod controller;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("💥 Cursor explosion WASM module initialized!");
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default config as JSON, for pages that want to tweak a copy
#[wasm_bindgen]
pub fn default_config_json() -> String {
    ExplosionConfig::default().to_json()
}

/// Start the effect with the default config. `false` means no canvas was found.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start() -> Result<bool, JsValue> {
    start_with(ExplosionConfig::default())
}

/// Start the effect with a JSON config; absent keys keep their defaults.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<bool, JsValue> {
    let config = ExplosionConfig::from_json(json)?;
    start_with(config)
}

#[cfg(target_arch = "wasm32")]
fn start_with(config: ExplosionConfig) -> Result<bool, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    api::wasm::start_effect(config).map(|handle| handle.is_some())
}

// Re-export main types
pub use controller::{ExplosionCore, PointerOutcome};
pub use dom::{CanvasSize, FilterPolicy, PointerSample, Surface, TargetNode};
pub use domain::{ExplosionConfig, IntRange, Particle, Point};
