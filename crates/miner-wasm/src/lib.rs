//! WebAssembly bindings for the goblin miner.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Mining a message at a given difficulty
//! - Double SHA256 hashing
//! - Timing searches with the host's monotonic clock

use wasm_bindgen::prelude::*;

pub mod clock;
pub mod miner;
pub mod state;

// Re-export main types for JS access
pub use clock::PerformanceClock;
pub use miner::{double_sha256_hex, mine};
pub use state::MiningResultInfo;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
