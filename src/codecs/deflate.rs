//! codecs/deflate.rs
//! DEFLATE in the zlib container (RFC 1950) via miniz_oxide's streaming core.
//!
//! Compression goes through `deflate::core` directly because that is the
//! layer that exposes the zlib strategy parameter; decompression drives
//! `inflate::stream` with `DataFormat::Zlib` so the 2-byte header and the
//! Adler-32 trailer are checked.

use miniz_oxide::deflate::core::{
    compress as deflate_step, create_comp_flags_from_zip_params, CompressionStrategy,
    CompressorOxide, TDEFLFlush, TDEFLStatus,
};
use miniz_oxide::inflate::stream::{inflate, InflateState};
use miniz_oxide::{DataFormat, MZError, MZFlush, MZStatus};

use crate::constants::{DEFAULT_LEVEL_DEFLATE, SCRATCH_CHUNK_SIZE, ZLIB_WINDOW_BITS};
use crate::types::{CompressionError, DeflateStrategy};

const CODEC: &str = "deflate";

fn miniz_strategy(strategy: DeflateStrategy) -> CompressionStrategy {
    match strategy {
        DeflateStrategy::Default => CompressionStrategy::Default,
        DeflateStrategy::Filtered => CompressionStrategy::Filtered,
        DeflateStrategy::HuffmanOnly => CompressionStrategy::HuffmanOnly,
        DeflateStrategy::Rle => CompressionStrategy::RLE,
        DeflateStrategy::Fixed => CompressionStrategy::Fixed,
    }
}

/// Compress `input` into a zlib stream with the default strategy and level.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress_with(input, DeflateStrategy::default())
}

/// Compress `input` into a zlib stream with an explicit strategy.
///
/// Strategy affects compressed size only; any compliant zlib decoder
/// recovers the same bytes. Empty input yields a valid (tiny) stream.
pub fn compress_with(
    input: &[u8],
    strategy: DeflateStrategy,
) -> Result<Vec<u8>, CompressionError> {
    let flags = create_comp_flags_from_zip_params(
        DEFAULT_LEVEL_DEFLATE,
        ZLIB_WINDOW_BITS,
        miniz_strategy(strategy) as i32,
    );
    let mut stream = CompressorOxide::new(flags);
    let mut out = vec![0u8; SCRATCH_CHUNK_SIZE];
    let mut in_pos = 0usize;
    let mut out_pos = 0usize;

    loop {
        if out_pos == out.len() {
            out.resize(out_pos + SCRATCH_CHUNK_SIZE, 0);
        }
        // Run while input remains, then finish-flush until the encoder is done.
        let finishing = in_pos == input.len();
        let flush = if finishing {
            TDEFLFlush::Finish
        } else {
            TDEFLFlush::None
        };
        let (status, consumed, written) =
            deflate_step(&mut stream, &input[in_pos..], &mut out[out_pos..], flush);
        in_pos += consumed;
        out_pos += written;
        match status {
            TDEFLStatus::Done => {
                out.truncate(out_pos);
                return Ok(out);
            }
            TDEFLStatus::Okay => {}
            TDEFLStatus::BadParam => {
                return Err(CompressionError::CodecInitFailed {
                    codec: CODEC,
                    msg: "encoder rejected parameters".into(),
                });
            }
            TDEFLStatus::PutBufFailed => {
                let msg = "encoder could not emit output".to_string();
                return Err(if finishing {
                    CompressionError::CodecFinishFailed { codec: CODEC, msg }
                } else {
                    CompressionError::CodecProcessFailed { codec: CODEC, msg }
                });
            }
        }
    }
}

/// Decompress a zlib stream produced by any standard-compliant encoder.
///
/// Fails with [`CompressionError::CodecProcessFailed`] on a bad header,
/// corrupt payload, Adler-32 mismatch, or a stream that ends early.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut stream = InflateState::new_boxed(DataFormat::Zlib);
    let mut out = vec![0u8; SCRATCH_CHUNK_SIZE];
    let mut in_pos = 0usize;
    let mut out_pos = 0usize;

    loop {
        if out_pos == out.len() {
            out.resize(out_pos + SCRATCH_CHUNK_SIZE, 0);
        }
        let res = inflate(
            &mut stream,
            &input[in_pos..],
            &mut out[out_pos..],
            MZFlush::None,
        );
        in_pos += res.bytes_consumed;
        out_pos += res.bytes_written;
        match res.status {
            Ok(MZStatus::StreamEnd) => {
                out.truncate(out_pos);
                return Ok(out);
            }
            // Buf means the decoder wants more input or more output space;
            // no progress with the input exhausted is a truncated stream.
            Ok(MZStatus::Ok) | Err(MZError::Buf) => {
                if in_pos == input.len() && res.bytes_written == 0 {
                    return Err(CompressionError::CodecProcessFailed {
                        codec: CODEC,
                        msg: "truncated zlib stream".into(),
                    });
                }
            }
            Ok(MZStatus::NeedDict) => {
                return Err(CompressionError::CodecProcessFailed {
                    codec: CODEC,
                    msg: "stream requires a preset dictionary".into(),
                });
            }
            Err(err) => {
                return Err(CompressionError::CodecProcessFailed {
                    codec: CODEC,
                    msg: format!("{err:?}"),
                });
            }
        }
    }
}
