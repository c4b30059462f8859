/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel buffer or a working table cannot be allocated.
    #[error("Memory allocation of {0} bytes failed")]
    Allocation(usize),

    /// Error when the maximum gray level is zero.
    #[error("Invalid maxval ({0}), expected a value in (0, 255]")]
    InvalidMaxval(u8),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a rectangle does not fit inside the image.
    #[error("Rectangle ({x}, {y}, {width}, {height}) is not inside the image")]
    InvalidRect {
        /// Left column of the rectangle.
        x: usize,
        /// Top row of the rectangle.
        y: usize,
        /// Width of the rectangle.
        width: usize,
        /// Height of the rectangle.
        height: usize,
    },

    /// Error when a scale factor is negative or not a number.
    #[error("Invalid factor ({0}), expected a non-negative number")]
    InvalidFactor(f64),
}
