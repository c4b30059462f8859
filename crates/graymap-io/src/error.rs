use graymap_image::ImageError;

/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The file does not start with the `P5` magic number.
    #[error("Invalid file format: expected a binary graymap (P5)")]
    InvalidMagic,

    /// A header field is missing or not a non-negative integer.
    #[error("Invalid {0} in the graymap header")]
    InvalidHeader(&'static str),

    /// The maxval is outside of `1..=255`.
    #[error("Invalid maxval {0}: must be between 1 and 255")]
    InvalidMaxval(u32),

    /// No whitespace byte between the maxval and the pixel data.
    #[error("Missing whitespace after the graymap header")]
    MissingWhitespace,

    /// The file holds fewer pixel bytes than the header announces.
    #[error("Truncated pixel data: expected {expected} bytes, found {found}")]
    Truncated {
        /// Number of pixel bytes announced by the header.
        expected: usize,
        /// Number of pixel bytes present.
        found: usize,
    },

    /// Error to create the image.
    #[error("Failed to create image")]
    ImageCreationError(#[from] ImageError),
}
