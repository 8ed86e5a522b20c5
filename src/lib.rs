//! # pglz
//!
//! A byte-exact implementation of the pglz compressed-datum format used by
//! PostgreSQL for TOAST, WAL full-page images, and base backups.
//!
//! The format is an LZ77 family: a stream of control bytes whose bits
//! classify the following items as literals or 2/3-byte back-references
//! (offset 1-4095, length 3-273). The compressor finds matches through a
//! 4096-entry history ring indexed by an 8192-bucket hash table with a
//! multiplicative fingerprint, and gives up early on incompressible input
//! according to a [`Strategy`].
//!
//! ## Features
//!
//! - **Zero runtime dependencies by default**
//! - Byte-for-byte stable output: any stream this crate produces decompresses
//!   on every other conforming implementation, and vice versa
//! - Optional SIMD match extension via the `simd` feature (SSE2 / NEON),
//!   bit-identical to the scalar path
//! - Strict and partial decompression modes
//!
//! ## Example
//!
//! ```rust
//! use pglz::{compress, decompress, Strategy};
//!
//! let data = b"the quick brown fox jumps over the lazy dog. ".repeat(8);
//! let packed = compress(&data, &Strategy::DEFAULT).unwrap();
//! assert!(packed.len() < data.len());
//!
//! // The raw length is stored out-of-band by the caller.
//! let restored = decompress(&packed, data.len(), true).unwrap();
//! assert_eq!(restored, data);
//! ```

#![cfg_attr(not(feature = "simd"), forbid(unsafe_code))]
#![warn(missing_docs)]

mod bits;
mod history;

pub mod compress;
pub mod decompress;
pub mod error;
pub mod simd;
pub mod strategy;

pub use compress::{compress, Compressor};
pub use decompress::{decompress, decompress_into, max_compressed_size};
pub use error::{Error, Result};
pub use strategy::Strategy;
