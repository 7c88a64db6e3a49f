//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use miner_wasm::{double_sha256_hex, mine, MiningResultInfo};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_double_sha256_hex() {
    assert_eq!(
        double_sha256_hex(b"hello"),
        "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
    );
}

#[wasm_bindgen_test]
fn test_mine_found() {
    let value = mine(b"hello world", 1, Some(100_000)).unwrap();
    let info: MiningResultInfo = serde_wasm_bindgen::from_value(value).unwrap();

    assert_eq!(info.nonce, 31);
    assert!(info.hash.starts_with('0'));
    assert!(info.elapsed_seconds >= 0.0);
}

#[wasm_bindgen_test]
fn test_mine_not_found_is_null() {
    let value = mine(b"hello world", 64, Some(100)).unwrap();
    assert!(value.is_null());
}

#[wasm_bindgen_test]
fn test_mine_negative_difficulty_throws() {
    let err = mine(b"", -1, None).unwrap_err();
    assert_eq!(
        err.as_string().unwrap(),
        "invalid argument `difficulty`: -1 (must be >= 0)"
    );
}
