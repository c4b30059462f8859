#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and malformed graymap files.
pub mod error;

/// Binary PGM (`P5`) image encoding and decoding.
///
/// Read and write 8-bit graymaps. See [`pgm::read_image_pgm`] and [`pgm::write_image_pgm`].
pub mod pgm;

pub use crate::error::IoError;
