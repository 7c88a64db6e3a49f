//! Sequential nonce search.

use alloc::string::String;
use core::ops::RangeInclusive;
use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::difficulty::Difficulty;
use crate::error::MineError;
use crate::hash::{digest_hex, Payload, DIGEST_LEN};

/// Largest nonce representable in the 4-byte encoding; the default search bound.
pub const MAX_NONCE: u32 = u32::MAX;

/// A successful mining attempt.
///
/// Built once, when the qualifying nonce is found, and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiningResult<'a> {
    #[serde(serialize_with = "hex::serde::serialize")]
    message: &'a [u8],
    difficulty: Difficulty,
    nonce: u32,
    hash: String,
    elapsed_seconds: f64,
    hashrate_hps: f64,
}

impl<'a> MiningResult<'a> {
    pub(crate) fn found(
        message: &'a [u8],
        difficulty: Difficulty,
        nonce: u32,
        digest: &[u8; DIGEST_LEN],
        elapsed_seconds: f64,
    ) -> Self {
        MiningResult {
            message,
            difficulty,
            nonce,
            hash: digest_hex(digest),
            elapsed_seconds,
            hashrate_hps: hashrate(u64::from(nonce) + 1, elapsed_seconds),
        }
    }

    /// The message the nonce was appended to.
    pub fn message(&self) -> &'a [u8] {
        self.message
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The smallest qualifying nonce in the searched range.
    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    /// Lowercase hex of the winning digest.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Hashes attempted per second, `f64::INFINITY` if no time was measured.
    pub fn hashrate_hps(&self) -> f64 {
        self.hashrate_hps
    }
}

/// Hashes per second for `attempts` hashes over `elapsed_seconds`.
///
/// Returns positive infinity when the clock measured no elapsed time.
#[inline]
pub fn hashrate(attempts: u64, elapsed_seconds: f64) -> f64 {
    if elapsed_seconds > 0.0 {
        attempts as f64 / elapsed_seconds
    } else {
        f64::INFINITY
    }
}

/// Scan `range` in ascending order and return the first qualifying nonce.
///
/// `should_stop` is consulted before each candidate; returning `true` ends
/// the scan without a match.
pub fn search_range<F>(
    payload: &mut Payload,
    range: RangeInclusive<u32>,
    difficulty: Difficulty,
    mut should_stop: F,
) -> Option<(u32, [u8; DIGEST_LEN])>
where
    F: FnMut(u32) -> bool,
{
    if !difficulty.is_reachable() {
        return None;
    }

    for nonce in range {
        if should_stop(nonce) {
            return None;
        }

        payload.set_nonce(nonce);
        let hash = payload.digest();

        if difficulty.is_met_by(&hash) {
            return Some((nonce, hash));
        }
    }

    None
}

/// Find the smallest nonce in `[0, max_nonce]` whose double-SHA256 of
/// `message || nonce_le` starts with `difficulty` hex zeros.
///
/// Returns `Ok(None)` when the range is exhausted. A negative difficulty is
/// rejected before any hashing.
#[cfg(feature = "std")]
pub fn mine(
    message: &[u8],
    difficulty: i64,
    max_nonce: u32,
) -> Result<Option<MiningResult<'_>>, MineError> {
    mine_with_clock(message, difficulty, max_nonce, &crate::clock::MonotonicClock)
}

/// [`mine`] with a caller-supplied clock.
#[tracing::instrument(level = "debug", skip(message, clock), fields(message_len = message.len()))]
pub fn mine_with_clock<'a, C>(
    message: &'a [u8],
    difficulty: i64,
    max_nonce: u32,
    clock: &C,
) -> Result<Option<MiningResult<'a>>, MineError>
where
    C: Clock + ?Sized,
{
    let difficulty = Difficulty::new(difficulty)?;
    if !difficulty.is_reachable() {
        debug!(%difficulty, "difficulty exceeds digest length, no nonce can match");
    }

    let start = clock.now();
    let mut payload = Payload::new(message);

    match search_range(&mut payload, 0..=max_nonce, difficulty, |_| false) {
        Some((nonce, hash)) => {
            let elapsed = clock.seconds_since(start);
            let result = MiningResult::found(message, difficulty, nonce, &hash, elapsed);
            debug!(nonce, hash = result.hash(), elapsed, "nonce found");
            Ok(Some(result))
        }
        None => {
            debug!(max_nonce, "nonce range exhausted");
            Ok(None)
        }
    }
}
