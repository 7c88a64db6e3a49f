//! SHA256 double-hashing and nonce payload construction.

use alloc::string::String;
use alloc::vec::Vec;
use sha2::{Digest, Sha256};

/// Length in bytes of a digest produced by [`double_sha256`].
pub const DIGEST_LEN: usize = 32;

/// Length in bytes of the serialized nonce appended to the message.
pub const NONCE_LEN: usize = 4;

/// Double SHA256: SHA256(SHA256(data)).
///
/// The second pass hashes the 32-byte intermediate digest, never the
/// original data. Any input, including an empty slice, is valid.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(data).into()
}

/// Render a digest as lowercase hex, in natural byte order.
pub fn digest_hex(digest: &[u8; DIGEST_LEN]) -> String {
    hex::encode(digest)
}

/// Count leading `'0'` characters of the digest's hex form.
///
/// Each byte contributes two hex digits, high nibble first.
pub fn leading_zero_nibbles(digest: &[u8; DIGEST_LEN]) -> u32 {
    let mut zeros = 0u32;
    for byte in digest {
        if *byte == 0 {
            zeros += 2;
        } else {
            if *byte >> 4 == 0 {
                zeros += 1;
            }
            break;
        }
    }
    zeros
}

/// Reusable `message || nonce_le` buffer.
///
/// Allocated once per search; only the trailing four bytes change between
/// candidates.
#[derive(Debug, Clone)]
pub struct Payload {
    bytes: Vec<u8>,
    split: usize,
}

impl Payload {
    /// Build a payload for `message` with nonce 0.
    pub fn new(message: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(message.len() + NONCE_LEN);
        bytes.extend_from_slice(message);
        bytes.extend_from_slice(&0u32.to_le_bytes());
        Payload {
            bytes,
            split: message.len(),
        }
    }

    /// Overwrite the nonce (little-endian) at the end of the buffer.
    #[inline]
    pub fn set_nonce(&mut self, nonce: u32) {
        self.bytes[self.split..].copy_from_slice(&nonce.to_le_bytes());
    }

    /// Double-hash the current payload.
    #[inline]
    pub fn digest(&self) -> [u8; DIGEST_LEN] {
        double_sha256(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_sha256() {
        // Test vector: SHA256d("hello")
        let hash = double_sha256(b"hello");
        let expected = hex::decode(
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        ).unwrap();

        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_double_sha256_empty() {
        let hash = double_sha256(b"");
        assert_eq!(
            digest_hex(&hash),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_sha256_abc() {
        // FIPS 180-2 test vector
        let hash = sha256(b"abc");
        assert_eq!(
            digest_hex(&hash),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_double_is_hash_of_intermediate() {
        let inputs: [&[u8]; 4] = [b"", b"abc", b"hello world", &[0u8; 80]];
        for data in inputs {
            let intermediate = sha256(data);
            assert_eq!(double_sha256(data), sha256(&intermediate));
            assert_ne!(double_sha256(data), intermediate);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(double_sha256(b"goblin"), double_sha256(b"goblin"));
    }

    #[test]
    fn test_leading_zero_nibbles() {
        let all_zero = [0x00; 32];
        assert_eq!(leading_zero_nibbles(&all_zero), 64);

        let mut hash = [0xFF; 32];
        assert_eq!(leading_zero_nibbles(&hash), 0);

        hash[0] = 0x0F;
        assert_eq!(leading_zero_nibbles(&hash), 1);

        hash[0] = 0x00;
        hash[1] = 0x00;
        hash[2] = 0x0A;
        assert_eq!(leading_zero_nibbles(&hash), 5);

        hash[2] = 0xA0;
        assert_eq!(leading_zero_nibbles(&hash), 4);
    }

    #[test]
    fn test_leading_zero_nibbles_matches_hex() {
        for nonce in 0u32..2_000 {
            let hash = double_sha256(&nonce.to_le_bytes());
            let hex = digest_hex(&hash);
            let expected = hex.chars().take_while(|c| *c == '0').count() as u32;
            assert_eq!(leading_zero_nibbles(&hash), expected, "nonce {}", nonce);
        }
    }

    #[test]
    fn test_payload_layout() {
        let mut payload = Payload::new(b"abc");
        assert_eq!(payload.as_bytes(), b"abc\x00\x00\x00\x00");

        payload.set_nonce(0x0403_0201);
        assert_eq!(payload.as_bytes(), b"abc\x01\x02\x03\x04");

        payload.set_nonce(u32::MAX);
        assert_eq!(payload.as_bytes(), b"abc\xff\xff\xff\xff");
    }

    #[test]
    fn test_payload_digest() {
        let payload = Payload::new(b"abc");
        assert_eq!(
            digest_hex(&payload.digest()),
            "b0adc160686acec721135ea0ada39effe0a3c81c684222cc01b98bfac329a3de"
        );
    }

    #[test]
    fn test_empty_message_payload() {
        let mut payload = Payload::new(b"");
        payload.set_nonce(27);
        assert_eq!(payload.as_bytes(), &27u32.to_le_bytes());
    }
}
