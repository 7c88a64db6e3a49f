//! Difficulty targets expressed as leading zero hex digits.

use alloc::string::String;
use core::fmt;
use serde::Serialize;

use crate::error::MineError;
use crate::hash::{leading_zero_nibbles, DIGEST_LEN};

/// Number of hex digits in a rendered digest.
pub const MAX_HEX_DIGITS: u64 = (DIGEST_LEN * 2) as u64;

/// Required number of leading `'0'` characters in a digest's hex form.
///
/// Always non-negative; negative inputs are rejected by [`Difficulty::new`].
/// Values above [`MAX_HEX_DIGITS`] are valid but can never be met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Difficulty(u64);

impl Difficulty {
    /// Validate a caller-supplied difficulty.
    pub fn new(value: i64) -> Result<Self, MineError> {
        u64::try_from(value)
            .map(Difficulty)
            .map_err(|_| MineError::InvalidArgument {
                name: "difficulty",
                value,
            })
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The hex prefix a qualifying digest must start with.
    pub fn target_prefix(self) -> String {
        // Unreachable difficulties would only allocate a prefix nothing can match.
        let len = self.0.min(MAX_HEX_DIGITS + 1) as usize;
        "0".repeat(len)
    }

    /// Whether any digest can satisfy this difficulty.
    pub fn is_reachable(self) -> bool {
        self.0 <= MAX_HEX_DIGITS
    }

    /// Check a digest against the target without rendering it as hex.
    #[inline]
    pub fn is_met_by(self, digest: &[u8; DIGEST_LEN]) -> bool {
        u64::from(leading_zero_nibbles(digest)) >= self.0
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = MineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Difficulty::new(value)
    }
}

impl From<u32> for Difficulty {
    fn from(value: u32) -> Self {
        Difficulty(u64::from(value))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
