//! Core proof-of-work logic for the goblin miner.
//!
//! This crate provides pure Rust implementations of:
//! - SHA256 double-hashing of `message || nonce_le` payloads
//! - Difficulty targets as a count of leading zero hex digits
//! - A sequential nonce search returning the smallest qualifying nonce
//! - A sharded multi-threaded search with the same result (`std` only)

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod clock;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod mine;
#[cfg(feature = "std")]
pub mod parallel;

pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use difficulty::{Difficulty, MAX_HEX_DIGITS};
pub use error::MineError;
pub use hash::{digest_hex, double_sha256, leading_zero_nibbles, sha256, Payload};
#[cfg(feature = "std")]
pub use mine::mine;
pub use mine::{hashrate, mine_with_clock, search_range, MiningResult, MAX_NONCE};
#[cfg(feature = "std")]
pub use parallel::{mine_parallel, mine_parallel_with_clock};
