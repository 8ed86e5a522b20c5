//! Compression: match finding over the history store and the main driver.

use crate::bits::TagWriter;
use crate::error::{Error, Result};
use crate::history::{bucket_of, table_size, History, INVALID_ENTRY};
use crate::strategy::Strategy;

/// Longest back-reference a tag can encode.
pub(crate) const MAX_MATCH: usize = 273;

/// First offset that no longer fits the 12-bit tag field; the chain walk
/// stops when a candidate reaches it.
const OFFSET_LIMIT: usize = 0x0FFF;

/// Hard cap on chain entries inspected per match search. Chains average
/// fewer than one entry under the multiplicative hash, so this only bounds
/// adversarial inputs.
const MAX_CHAIN: usize = 256;

/// Measure how far two regions keep matching, up to `max_len` bytes.
#[inline]
fn match_extend(a: &[u8], b: &[u8], max_len: usize) -> usize {
    #[cfg(feature = "simd")]
    {
        crate::simd::match_extend(a, b, max_len)
    }

    #[cfg(not(feature = "simd"))]
    {
        crate::simd::fallback::match_extend(a, b, max_len)
    }
}

/// A reusable compressor holding the history scratch (~80 KiB).
///
/// Creating one per call works; reusing one across calls skips the
/// allocation. The `&mut self` receiver makes "one compression at a time
/// per scratch" a compile-time property — concurrent callers each need
/// their own `Compressor`.
#[derive(Debug)]
pub struct Compressor {
    history: History,
}

impl Compressor {
    /// Create a compressor with fresh history scratch.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Compress `source` under `strategy`, returning the compressed stream.
    ///
    /// Returns [`Error::NotCompressible`] when the strategy refuses the
    /// input or the output budget runs out; the caller should then store
    /// the input verbatim. The raw length is not part of the stream and
    /// must be stored out-of-band.
    pub fn compress(&mut self, source: &[u8], strategy: &Strategy) -> Result<Vec<u8>> {
        let slen = source.len();

        if strategy.match_size_good == 0
            || slen < strategy.min_input_size
            || slen > strategy.max_input_size
        {
            return Err(Error::NotCompressible);
        }

        let good_match = strategy.match_size_good.clamp(17, MAX_MATCH);
        let good_drop = strategy.match_size_drop.min(100) as usize;
        let need_rate = strategy.min_comp_rate.min(99) as usize;

        // Maximum output size the strategy tolerates. Divide first on huge
        // inputs so the multiply cannot overflow 32-bit arithmetic in
        // implementations that use it; the branch point is kept so refusal
        // decisions agree across implementations.
        let result_max = if slen > i32::MAX as usize / 100 {
            (slen / 100) * (100 - need_rate)
        } else {
            (slen * (100 - need_rate)) / 100
        };

        let hashsz = table_size(slen);
        let mask = hashsz - 1;
        self.history.reset(hashsz);

        let mut writer = TagWriter::with_capacity(slen);
        let mut dp = 0usize;
        let mut found_match = false;
        let skip_after_match = strategy.skip_after_match;

        // Main loop: runs while at least 4 bytes remain, so the finder's
        // 4-byte reads are in-bounds on both sides.
        while dp + 4 <= slen {
            if writer.len() >= result_max {
                return Err(Error::NotCompressible);
            }
            if !found_match && writer.len() >= strategy.first_success_by {
                return Err(Error::NotCompressible);
            }

            if let Some((match_len, match_off)) =
                find_match(&self.history, source, dp, good_match, good_drop, mask)
            {
                writer.put_tag(match_len, match_off);

                if skip_after_match {
                    // Insert only the first matched byte and jump the
                    // cursor over the rest. Positions inside the match
                    // never enter the history, which may cost later
                    // matches that would have started there.
                    self.history.add(source, dp, mask);
                    dp += match_len;
                    if dp > slen {
                        dp = slen;
                    }
                } else {
                    let match_end = dp + match_len;
                    while dp < match_end {
                        self.history.add(source, dp, mask);
                        dp += 1;
                    }
                }
                found_match = true;
            } else {
                writer.put_literal(source[dp]);
                self.history.add(source, dp, mask);
                dp += 1;
            }
        }

        // Tail: the last 0-3 bytes go out as literals.
        while dp < slen {
            if writer.len() >= result_max {
                return Err(Error::NotCompressible);
            }
            writer.put_literal(source[dp]);
            self.history.add(source, dp, mask);
            dp += 1;
        }

        let out = writer.finish();
        if out.len() >= result_max {
            return Err(Error::NotCompressible);
        }
        Ok(out)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress `source` under `strategy` with one-shot scratch.
///
/// Convenience wrapper over [`Compressor::compress`]; see there for the
/// failure contract.
pub fn compress(source: &[u8], strategy: &Strategy) -> Result<Vec<u8>> {
    Compressor::new().compress(source, strategy)
}

/// Walk the bucket chain for the 4-gram at `pos` and return the longest
/// back-reference found, or `None` when nothing reaches 3 bytes.
///
/// The caller guarantees at least 4 bytes remain at `pos`. Every candidate
/// position precedes `pos`, so the 4-byte prefix comparison is in-bounds on
/// both sides. Candidates whose 4th byte differs are sacrificed even when
/// the first 3 match; the tag format does not require finding them.
fn find_match(
    history: &History,
    src: &[u8],
    pos: usize,
    good_match: usize,
    good_drop: usize,
    mask: usize,
) -> Option<(usize, usize)> {
    let mut best_len = 0usize;
    let mut best_off = 0usize;
    let mut good = good_match;
    let mut chain = 0usize;

    let mut entno = history.buckets[bucket_of(src, pos, mask)];
    while entno != INVALID_ENTRY {
        let ent = &history.entries[entno as usize];
        let cand = ent.pos;
        let off = pos - cand;

        // Older entries only get further away; none of them can fit the
        // 12-bit offset field either.
        if off >= OFFSET_LIMIT {
            break;
        }

        debug_assert!(cand < pos);
        debug_assert!(pos + 4 <= src.len());

        // Fast reject on the first 4 bytes; compiles to one 32-bit compare.
        if src[pos..pos + 4] == src[cand..cand + 4] {
            let mut this_len = 4;
            let mut rejected = false;

            // With a 16+ byte best already in hand, check the whole best
            // region at once: a candidate that cannot reach best_len can
            // be dropped without measuring it.
            if best_len >= 16 {
                if src[pos + 4..pos + best_len] == src[cand + 4..cand + best_len] {
                    this_len = best_len;
                } else {
                    rejected = true;
                }
            }

            if !rejected {
                let room = (src.len() - (pos + this_len)).min(MAX_MATCH - this_len);
                this_len += match_extend(&src[pos + this_len..], &src[cand + this_len..], room);

                if this_len > best_len {
                    best_len = this_len;
                    best_off = off;
                }
            }
        }

        entno = ent.next;

        chain += 1;
        if chain >= MAX_CHAIN {
            break;
        }

        // Settle for shorter matches the longer the walk drags on.
        if entno != INVALID_ENTRY {
            if best_len >= good {
                break;
            }
            good -= good * good_drop / 100;
        }
    }

    if best_len > 2 {
        Some((best_len, best_off))
    } else {
        None
    }
}
