//! JS-facing records.

use miner_core::MiningResult;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Result of a successful `mine` call, as seen from JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningResultInfo {
    /// The mined message, decoded as UTF-8 (lossy).
    pub message: String,
    /// Required leading zero hex digits.
    pub difficulty: u64,
    /// The winning nonce.
    pub nonce: u32,
    /// Lowercase hex digest.
    pub hash: String,
    /// Wall-clock search time in seconds.
    pub elapsed_seconds: f64,
    /// Hashes per second (`Infinity` if no time was measured).
    pub hashrate_hps: f64,
    /// Formatted hash rate, e.g. "1.25 MH/s".
    pub hashrate_display: String,
}

impl MiningResultInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

impl From<&MiningResult<'_>> for MiningResultInfo {
    fn from(result: &MiningResult<'_>) -> Self {
        MiningResultInfo {
            message: String::from_utf8_lossy(result.message()).into_owned(),
            difficulty: result.difficulty().get(),
            nonce: result.nonce(),
            hash: result.hash().to_string(),
            elapsed_seconds: result.elapsed_seconds(),
            hashrate_hps: result.hashrate_hps(),
            hashrate_display: format_hash_rate(result.hashrate_hps()),
        }
    }
}

/// Format hash rate for display.
pub fn format_hash_rate(hash_rate: f64) -> String {
    if hash_rate.is_infinite() {
        "∞ H/s".to_string()
    } else if hash_rate >= 1_000_000_000.0 {
        format!("{:.2} GH/s", hash_rate / 1_000_000_000.0)
    } else if hash_rate >= 1_000_000.0 {
        format!("{:.2} MH/s", hash_rate / 1_000_000.0)
    } else if hash_rate >= 1_000.0 {
        format!("{:.2} KH/s", hash_rate / 1_000.0)
    } else {
        format!("{:.2} H/s", hash_rate)
    }
}
