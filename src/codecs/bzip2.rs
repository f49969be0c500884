//! codecs/bzip2.rs
//! BZIP2 container via the bzip2 crate's low-level stream API.
//!
//! Compression runs the stream through `Action::Run` until the whole input
//! is consumed, then drains `Action::Finish` until end of stream, so run and
//! finish faults surface as distinct errors.

use bzip2::{Action, Compress, Compression, Decompress, Status};

use crate::constants::{BZIP2_LEVEL_RANGE, DEFAULT_LEVEL_BZIP2, SCRATCH_CHUNK_SIZE};
use crate::types::CompressionError;

const CODEC: &str = "bzip2";

// 0 selects libbz2's default work factor (30).
const WORK_FACTOR: u32 = 0;

/// Compress `input` at the default level (9, maximum compression).
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress_with(input, DEFAULT_LEVEL_BZIP2)
}

/// Compress `input` at an explicit level in `1..=9`.
///
/// Levels outside the range fail with
/// [`CompressionError::CodecInitFailed`]. Empty input yields a valid
/// (tiny) stream.
pub fn compress_with(input: &[u8], level: u32) -> Result<Vec<u8>, CompressionError> {
    if !BZIP2_LEVEL_RANGE.contains(&level) {
        return Err(CompressionError::CodecInitFailed {
            codec: CODEC,
            msg: format!("compression level {level} outside {BZIP2_LEVEL_RANGE:?}"),
        });
    }
    let mut stream = Compress::new(Compression::new(level), WORK_FACTOR);
    let mut out = Vec::with_capacity(SCRATCH_CHUNK_SIZE);
    let mut in_pos = 0usize;

    // Feed the whole input.
    while in_pos < input.len() {
        if out.len() == out.capacity() {
            out.reserve(SCRATCH_CHUNK_SIZE);
        }
        let before = stream.total_in();
        let status = stream
            .compress_vec(&input[in_pos..], &mut out, Action::Run)
            .map_err(|e| CompressionError::CodecProcessFailed {
                codec: CODEC,
                msg: e.to_string(),
            })?;
        // Delta fits usize: it is bounded by the slice just submitted.
        in_pos += (stream.total_in() - before) as usize;
        match status {
            Status::RunOk => {}
            other => {
                return Err(CompressionError::CodecProcessFailed {
                    codec: CODEC,
                    msg: format!("unexpected status during run: {other:?}"),
                });
            }
        }
    }

    // Drain until the codec declares end of stream.
    loop {
        if out.len() == out.capacity() {
            out.reserve(SCRATCH_CHUNK_SIZE);
        }
        let status = stream
            .compress_vec(&[], &mut out, Action::Finish)
            .map_err(|e| CompressionError::CodecFinishFailed {
                codec: CODEC,
                msg: e.to_string(),
            })?;
        match status {
            Status::StreamEnd => return Ok(out),
            Status::FinishOk => {}
            other => {
                return Err(CompressionError::CodecFinishFailed {
                    codec: CODEC,
                    msg: format!("unexpected status during finish: {other:?}"),
                });
            }
        }
    }
}

/// Decompress a standard BZIP2 stream (`BZh` magic).
///
/// Fails with [`CompressionError::CodecProcessFailed`] on bad magic,
/// corrupt payload, or a stream that ends early.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut stream = Decompress::new(false);
    let mut out = Vec::with_capacity(SCRATCH_CHUNK_SIZE);
    let mut in_pos = 0usize;

    loop {
        if out.len() == out.capacity() {
            out.reserve(SCRATCH_CHUNK_SIZE);
        }
        let before_in = stream.total_in();
        let before_out = out.len();
        let status = stream
            .decompress_vec(&input[in_pos..], &mut out)
            .map_err(|e| CompressionError::CodecProcessFailed {
                codec: CODEC,
                msg: e.to_string(),
            })?;
        in_pos += (stream.total_in() - before_in) as usize;
        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::MemNeeded => {
                // No forward progress with the input exhausted means the
                // stream ended early.
                if in_pos == input.len() && out.len() == before_out {
                    return Err(CompressionError::CodecProcessFailed {
                        codec: CODEC,
                        msg: "truncated bzip2 stream".into(),
                    });
                }
            }
            other => {
                return Err(CompressionError::CodecProcessFailed {
                    codec: CODEC,
                    msg: format!("unexpected status: {other:?}"),
                });
            }
        }
    }
}
