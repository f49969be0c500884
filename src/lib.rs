//! bufcodec
//!
//! Whole-buffer compression and decompression over `&[u8]`.
//! Two codec families: DEFLATE in the zlib container (RFC 1950) and BZIP2.
//! Each call drives a private, stack-scoped codec stream to completion and
//! returns an owned `Vec<u8>`; no state survives between calls.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec adapters
pub mod codecs;

pub use codecs::{bzip2, deflate};
pub use types::{CompressionError, DeflateStrategy};
