//! codecs/mod.rs
//! One submodule per codec family. Each exposes the same shape:
//! `compress` (defaults), `compress_with` (explicit tunable), `decompress`.

pub mod bzip2;
pub mod deflate;
