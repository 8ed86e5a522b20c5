//! SIMD acceleration for the match-extension inner loop.
//!
//! Match finding spends most of its time measuring how far two regions of
//! the input keep matching. The vector kernels here compare 16 bytes per
//! iteration and locate the first differing byte with a bit scan; the
//! scalar fallback is the plain byte loop. Every path returns the same
//! length for the same inputs, so compressed output is bit-identical
//! whichever one runs. Feature detection is cached at startup.

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use std::sync::LazyLock;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod x86_64;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub mod aarch64;

pub mod fallback;

/// SSE2 availability, detected once at program startup. SSE2 is part of the
/// x86_64 baseline, so this is effectively always true; the check keeps the
/// scalar path reachable and testable.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
static HAS_SSE2: LazyLock<bool> = LazyLock::new(|| is_x86_feature_detected!("sse2"));

/// Length of the common prefix of `a` and `b`, up to `max_len` bytes.
///
/// Both slices must hold at least `max_len` bytes. No path reads past
/// either slice: full 16-byte loads happen only while `len + 16 <= max_len`,
/// and the remainder goes through the scalar tail.
#[inline]
pub fn match_extend(a: &[u8], b: &[u8], max_len: usize) -> usize {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if *HAS_SSE2 {
            return unsafe { x86_64::match_extend_sse2(a, b, max_len) };
        }
        fallback::match_extend(a, b, max_len)
    }

    #[cfg(all(feature = "simd", target_arch = "aarch64"))]
    {
        // NEON is always available on aarch64.
        unsafe { aarch64::match_extend_neon(a, b, max_len) }
    }

    #[cfg(not(all(
        feature = "simd",
        any(target_arch = "x86_64", target_arch = "aarch64")
    )))]
    fallback::match_extend(a, b, max_len)
}
