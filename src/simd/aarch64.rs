//! ARM64 NEON implementation of the match-extension kernel.

use std::arch::aarch64::*;

/// Length of the common prefix of `a` and `b`, up to `max_len` bytes,
/// comparing 16 bytes per iteration with VCEQQ and an all-lanes minimum.
///
/// Both slices must hold at least `max_len` bytes; full-vector loads happen
/// only while `len + 16 <= max_len`, the remainder is scalar.
///
/// # Safety
/// Caller must ensure NEON is available (always true on aarch64).
#[target_feature(enable = "neon")]
pub unsafe fn match_extend_neon(a: &[u8], b: &[u8], max_len: usize) -> usize {
    debug_assert!(a.len() >= max_len && b.len() >= max_len);
    let mut len = 0;

    while len + 16 <= max_len {
        let va = vld1q_u8(a[len..].as_ptr());
        let vb = vld1q_u8(b[len..].as_ptr());

        // 0xFF where lanes are equal, 0x00 where they differ.
        let cmp = vceqq_u8(va, vb);

        if vminvq_u8(cmp) != 0xFF {
            // Some lane differs; store and scan for the first 0x00.
            let mut lanes = [0u8; 16];
            vst1q_u8(lanes.as_mut_ptr(), cmp);
            for (i, &lane) in lanes.iter().enumerate() {
                if lane == 0 {
                    return len + i;
                }
            }
        }
        len += 16;
    }

    while len < max_len && a[len] == b[len] {
        len += 1;
    }

    len
}
