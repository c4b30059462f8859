#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use graymap_image as image;

#[doc(inline)]
pub use graymap_imgproc as imgproc;

#[doc(inline)]
pub use graymap_io as io;
