//! constants.rs
//! Codec defaults and output growth tuning.

/// Scratch chunk size for incremental output growth (16 KiB).
/// Tuning only; never observable in results.
pub const SCRATCH_CHUNK_SIZE: usize = 16 * 1024;

/// Default deflate compression level (zlib balanced default).
pub const DEFAULT_LEVEL_DEFLATE: i32 = 6;

/// Default bzip2 compression level (maximum compression, 900k blocks).
pub const DEFAULT_LEVEL_BZIP2: u32 = 9;

/// Valid bzip2 compression levels.
pub const BZIP2_LEVEL_RANGE: std::ops::RangeInclusive<u32> = 1..=9;

/// zlib window bits: full 32 KiB window, zlib header and Adler-32 trailer.
pub const ZLIB_WINDOW_BITS: i32 = 15;
