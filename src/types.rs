//! types.rs
//! Strategy selector and error taxonomy shared by all codecs.

use thiserror::Error;

/// The five standard zlib deflate strategies.
///
/// Strategy biases how the encoder models the input; it never changes what a
/// compliant decoder recovers, only the compressed size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeflateStrategy {
    /// General-purpose LZ77 + Huffman (zlib `Z_DEFAULT_STRATEGY`).
    #[default]
    Default,
    /// For data produced by a filter/predictor (`Z_FILTERED`).
    Filtered,
    /// Huffman coding only, no string matching (`Z_HUFFMAN_ONLY`).
    HuffmanOnly,
    /// Match distances limited to one, run-length style (`Z_RLE`).
    Rle,
    /// Fixed Huffman tables only (`Z_FIXED`).
    Fixed,
}

impl DeflateStrategy {
    /// All strategies, for exhaustive testing.
    pub const ALL: [DeflateStrategy; 5] = [
        DeflateStrategy::Default,
        DeflateStrategy::Filtered,
        DeflateStrategy::HuffmanOnly,
        DeflateStrategy::Rle,
        DeflateStrategy::Fixed,
    ];
}

/// Failure surfaced by a codec call.
///
/// The three variants separate "could not start" from "corrupt or unexpected
/// data mid-stream" from "could not finish", so callers can tell bad input
/// apart from bad parameters. No variant ever accompanies a partial buffer.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// Codec stream could not be set up (bad parameter, allocation failure).
    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: &'static str, msg: String },

    /// Mid-stream codec fault, including malformed or truncated input.
    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },

    /// Codec could not cleanly complete/flush the stream.
    #[error("codec {codec} finish failed: {msg}")]
    CodecFinishFailed { codec: &'static str, msg: String },
}
