//! Multi-threaded nonce search over disjoint shards.
//!
//! Each worker runs the sequential [`search_range`] over its own contiguous
//! slice of `[0, max_nonce]`. The lowest match reported so far is shared
//! through an atomic so workers stop once every remaining candidate is larger
//! than it. The coordinator returns the minimum nonce over all reports, so
//! the answer never depends on which worker finishes first.

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use tracing::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::difficulty::Difficulty;
use crate::error::MineError;
use crate::hash::{Payload, DIGEST_LEN};
use crate::mine::{search_range, MiningResult};

/// Sentinel stored in the shared best-nonce slot before any match.
const NO_MATCH: u64 = u64::MAX;

/// Parallel counterpart of [`crate::mine::mine`].
///
/// Returns the same nonce as the sequential search for any `threads`.
/// `threads = 0` is treated as 1.
pub fn mine_parallel(
    message: &[u8],
    difficulty: i64,
    max_nonce: u32,
    threads: usize,
) -> Result<Option<MiningResult<'_>>, MineError> {
    mine_parallel_with_clock(message, difficulty, max_nonce, threads, &MonotonicClock)
}

/// [`mine_parallel`] with a caller-supplied clock.
#[tracing::instrument(level = "debug", skip(message, clock), fields(message_len = message.len()))]
pub fn mine_parallel_with_clock<'a, C>(
    message: &'a [u8],
    difficulty: i64,
    max_nonce: u32,
    threads: usize,
    clock: &C,
) -> Result<Option<MiningResult<'a>>, MineError>
where
    C: Clock + ?Sized,
{
    let difficulty = Difficulty::new(difficulty)?;
    let start = clock.now();

    let shards = shard_ranges(max_nonce, threads);
    debug!(shards = shards.len(), "starting workers");

    let best = AtomicU64::new(NO_MATCH);
    let reports: Vec<Option<(u32, [u8; DIGEST_LEN])>> = thread::scope(|scope| {
        let handles: Vec<_> = shards
            .into_iter()
            .enumerate()
            .map(|(id, range)| {
                let best = &best;
                scope.spawn(move || run_worker(id, message, range, difficulty, best))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(report) => report,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    match reports.into_iter().flatten().min_by_key(|(nonce, _)| *nonce) {
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

fn run_worker(
    id: usize,
    message: &[u8],
    range: RangeInclusive<u32>,
    difficulty: Difficulty,
    best: &AtomicU64,
) -> Option<(u32, [u8; DIGEST_LEN])> {
    trace!(id, start = range.start(), end = range.end(), "worker started");

    let mut payload = Payload::new(message);
    let found = search_range(&mut payload, range, difficulty, |nonce| {
        u64::from(nonce) > best.load(Ordering::Relaxed)
    });

    if let Some((nonce, _)) = found {
        best.fetch_min(u64::from(nonce), Ordering::Relaxed);
        trace!(id, nonce, "worker matched");
    }
    found
}

/// Split `[0, max_nonce]` into at most `threads` contiguous, ascending,
/// non-overlapping ranges that cover it exactly.
pub fn shard_ranges(max_nonce: u32, threads: usize) -> Vec<RangeInclusive<u32>> {
    let total = u64::from(max_nonce) + 1;
    let count = (threads.max(1) as u64).min(total);
    let chunk = total.div_ceil(count);

    let mut shards = Vec::with_capacity(count as usize);
    let mut start = 0u64;
    while start < total {
        let end = (start + chunk).min(total) - 1;
        shards.push(start as u32..=end as u32);
        start = end + 1;
    }
    shards
}
