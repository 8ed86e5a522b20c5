//! Compression strategies: when to try compressing and how hard to search.

/// An immutable configuration record gating compression eligibility and
/// shaping the aggressiveness of the match search.
///
/// The driver clamps `match_size_good` to `[17, 273]`, `match_size_drop` to
/// `[0, 100]`, and `min_comp_rate` to `[0, 99]` before use; the stored
/// values are taken as-is otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    /// Inputs shorter than this are not compressed.
    pub min_input_size: usize,
    /// Inputs longer than this are not compressed.
    pub max_input_size: usize,
    /// Required compression rate as an integer percent in `[0, 99]`: the
    /// output must stay below `input_len * (100 - rate) / 100` bytes.
    pub min_comp_rate: u32,
    /// If no back-reference has been emitted by the time the output reaches
    /// this many bytes, give up.
    pub first_success_by: usize,
    /// Stop walking a bucket chain once a candidate match of this length has
    /// been found. Zero refuses compression entirely.
    pub match_size_good: usize,
    /// Percent in `[0, 100]` by which `match_size_good` decays after each
    /// chain entry visited, so that long chains settle for shorter matches.
    pub match_size_drop: u32,
    /// When true, only the first byte of a match is inserted into the
    /// history and the cursor jumps over the rest. Trades a small amount of
    /// ratio for a large amount of throughput on compressible data.
    pub skip_after_match: bool,
}

impl Strategy {
    /// The standard strategy: skip inputs below 32 bytes, require 25%
    /// savings, and give up if the first kilobyte produces no match.
    pub const DEFAULT: Strategy = Strategy {
        min_input_size: 32,
        max_input_size: usize::MAX,
        min_comp_rate: 25,
        first_success_by: 1024,
        match_size_good: 128,
        match_size_drop: 10,
        skip_after_match: false,
    };

    /// Compress any input and accept any saving, however small. Searches
    /// chains harder than [`Strategy::DEFAULT`] and never gives up early.
    pub const ALWAYS: Strategy = Strategy {
        min_input_size: 0,
        max_input_size: usize::MAX,
        min_comp_rate: 0,
        first_success_by: usize::MAX,
        match_size_good: 128,
        match_size_drop: 6,
        skip_after_match: false,
    };

    /// [`Strategy::DEFAULT`] with `skip_after_match` enabled: 2-10x faster
    /// on compressible data for a ratio cost of a few percentage points.
    pub const SKIP: Strategy = Strategy {
        skip_after_match: true,
        ..Strategy::DEFAULT
    };
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::DEFAULT
    }
}
