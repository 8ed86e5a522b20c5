//! Error types for the pglz library.

use std::fmt;

/// Result type alias for pglz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during compression or decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input is not compressible under the given strategy: its size is
    /// outside the strategy's gate, or the output budget was exhausted
    /// before enough compression was achieved. The caller should store the
    /// input verbatim.
    NotCompressible,
    /// A back-reference tag extends past the end of the compressed input.
    TruncatedTag,
    /// A back-reference tag carries offset zero.
    ZeroOffset,
    /// A back-reference offset reaches before the start of the output
    /// produced so far.
    OffsetTooFar {
        /// Offset encoded in the tag.
        offset: usize,
        /// Number of bytes produced when the tag was decoded.
        written: usize,
    },
    /// Strict decompression did not consume the whole input and fill the
    /// whole output exactly.
    IncompleteStream {
        /// Bytes actually produced.
        produced: usize,
        /// Bytes the caller declared as the raw size.
        expected: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotCompressible => {
                write!(f, "input not compressible under this strategy")
            }
            Error::TruncatedTag => {
                write!(f, "compressed stream ends inside a back-reference tag")
            }
            Error::ZeroOffset => {
                write!(f, "back-reference tag with zero offset")
            }
            Error::OffsetTooFar { offset, written } => {
                write!(
                    f,
                    "back-reference offset {} exceeds {} bytes of output",
                    offset, written
                )
            }
            Error::IncompleteStream { produced, expected } => {
                write!(
                    f,
                    "stream ended after {} of {} expected bytes",
                    produced, expected
                )
            }
        }
    }
}

impl std::error::Error for Error {}
