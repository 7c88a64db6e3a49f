//! Mining entry points exported to JavaScript.

use miner_core::{digest_hex, double_sha256, mine_with_clock, MAX_NONCE};
use wasm_bindgen::prelude::*;

use crate::clock::PerformanceClock;
use crate::state::MiningResultInfo;

/// Search `[0, max_nonce]` for the smallest nonce whose double-SHA256 of
/// `message || nonce_le` starts with `difficulty` zero hex digits.
///
/// # Arguments
/// * `message` - Bytes the nonce is appended to
/// * `difficulty` - Required leading zero hex digits; negative values throw
/// * `max_nonce` - Inclusive upper bound, defaults to `0xFFFFFFFF`
///
/// # Returns
/// A result object, or `null` when no nonce in range qualifies.
#[wasm_bindgen]
pub fn mine(message: &[u8], difficulty: i32, max_nonce: Option<u32>) -> Result<JsValue, JsValue> {
    let clock = PerformanceClock::new();
    let max_nonce = max_nonce.unwrap_or(MAX_NONCE);

    let result = mine_with_clock(message, i64::from(difficulty), max_nonce, &clock)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    match result {
        Some(found) => MiningResultInfo::from(&found).to_js(),
        None => Ok(JsValue::NULL),
    }
}

/// Double SHA256 of `data` as lowercase hex.
#[wasm_bindgen]
pub fn double_sha256_hex(data: &[u8]) -> String {
    digest_hex(&double_sha256(data))
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
