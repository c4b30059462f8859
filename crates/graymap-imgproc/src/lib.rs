#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// pasting and alpha blending of one image into another.
pub mod blend;

/// image cropping module.
pub mod crop;

/// image enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// image rotation module.
pub mod rotate;

/// exhaustive sub-image search.
pub mod search;

/// image statistics module.
pub mod stats;

/// operations to threshold images.
pub mod threshold;
