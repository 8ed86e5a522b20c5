//! Fuzz target for the decompressor on arbitrary byte streams.
//!
//! Malformed streams must fail cleanly: no panic, and never a byte written
//! past the declared raw size.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use pglz::decompress_into;

#[derive(Arbitrary, Debug)]
struct DecompressInput {
    raw_size: u16,
    strict: bool,
    stream: Vec<u8>,
}

fuzz_target!(|input: DecompressInput| {
    if input.stream.len() > 1024 * 1024 {
        return;
    }

    let raw_size = input.raw_size as usize;
    let mut guarded = vec![0xA5u8; raw_size + 16];

    let result = decompress_into(&input.stream, &mut guarded[..raw_size], input.strict);

    // Whatever happened, the guard region is untouched.
    assert!(
        guarded[raw_size..].iter().all(|&b| b == 0xA5),
        "write past declared raw size"
    );

    if let Ok(produced) = result {
        assert!(produced <= raw_size);
        if input.strict {
            assert_eq!(produced, raw_size);
        }
    }
});
