//! Human-readable and JSON rendering of a mining outcome.

use std::fmt::Write;

use miner_core::MiningResult;

pub const NOT_FOUND: &str = "No valid nonce found.";

/// Render the outcome the way an operator reads it.
pub fn render(result: Option<&MiningResult<'_>>) -> String {
    let Some(result) = result else {
        return format!("{NOT_FOUND}\n");
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "BLOCK MINED");
    let _ = writeln!(out, "Message:    {}", String::from_utf8_lossy(result.message()));
    let _ = writeln!(out, "Difficulty: {}", result.difficulty());
    let _ = writeln!(out, "Nonce:      {}", result.nonce());
    let _ = writeln!(out, "Hash:       {}", result.hash());
    let _ = writeln!(out, "Time (s):   {:.6}", result.elapsed_seconds());
    let _ = writeln!(out, "Hashrate:   {:.0} H/s", result.hashrate_hps());
    out
}

/// Serialize the outcome; absence becomes `null`.
pub fn to_json(result: Option<&MiningResult<'_>>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&result)
}
