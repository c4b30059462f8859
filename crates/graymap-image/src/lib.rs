#![deny(missing_docs)]
//! Grayscale image type with bounds-checked pixel access and instrumentation counters

/// image representation for gray level rasters.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Counters for measuring the cost of image operations.
pub mod instrument;

pub use crate::error::ImageError;
pub use crate::image::{try_filled_vec, GrayImage, ImageSize, PIX_MAX};
pub use crate::instrument::{Counter, Counters, NoopRecorder, Recorder};
