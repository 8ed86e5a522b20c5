//! Fuzz target for compress → decompress round-trip identity.
//!
//! Any input the compressor accepts must decompress back byte-for-byte
//! under strict checking, for every strategy.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use pglz::{compress, decompress, Strategy};

/// Structured fuzz input: a strategy selector plus raw data.
#[derive(Arbitrary, Debug)]
struct RoundtripInput {
    strategy: u8,
    data: Vec<u8>,
}

fuzz_target!(|input: RoundtripInput| {
    if input.data.is_empty() {
        return;
    }

    // pglz inputs are bounded in practice; cap to keep the fuzzer fast.
    if input.data.len() > 1024 * 1024 {
        return;
    }

    let strategy = match input.strategy % 3 {
        0 => Strategy::DEFAULT,
        1 => Strategy::ALWAYS,
        _ => Strategy::SKIP,
    };

    if let Ok(packed) = compress(&input.data, &strategy) {
        let restored =
            decompress(&packed, input.data.len(), true).expect("own output must decode strictly");
        assert_eq!(restored, input.data, "round-trip mismatch");
    }

    // ALWAYS exercises the hot loop on inputs DEFAULT refuses.
    if let Ok(packed) = compress(&input.data, &Strategy::ALWAYS) {
        let restored = decompress(&packed, input.data.len(), true).expect("strict decode");
        assert_eq!(restored, input.data);
    }
});
