use std::{fs, path::Path};

use graymap_image::{GrayImage, ImageSize, PIX_MAX};

use crate::error::IoError;

/// The magic number of a binary graymap.
const MAGIC: &[u8; 2] = b"P5";

/// A cursor over the bytes of a PGM header.
struct HeaderReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    // skips whitespace and `#` comments running to the end of the line
    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.pos += 1;
            } else if c == b'#' {
                while let Some(c) = self.peek() {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn read_magic(&mut self) -> Result<(), IoError> {
        if !self.bytes.starts_with(MAGIC) {
            return Err(IoError::InvalidMagic);
        }
        self.pos += MAGIC.len();

        // the magic must be a token of its own
        match self.peek() {
            Some(c) if c.is_ascii_whitespace() || c == b'#' => Ok(()),
            _ => Err(IoError::InvalidMagic),
        }
    }

    fn read_number(&mut self, field: &'static str) -> Result<u32, IoError> {
        self.skip_separators();

        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }

        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|digits| digits.parse::<u32>().ok())
            .ok_or(IoError::InvalidHeader(field))
    }

    fn read_single_whitespace(&mut self) -> Result<(), IoError> {
        match self.peek() {
            Some(c) if c.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(IoError::MissingWhitespace),
        }
    }

    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

/// Decode a binary PGM (`P5`) image from raw bytes.
///
/// The header is `P5`, the width, the height and the maxval as ASCII integers separated by
/// whitespace, with `#` comment lines allowed between them. A single whitespace byte
/// follows the maxval, then `width * height` pixel bytes in raster scan order. Bytes past
/// the pixel data are ignored.
///
/// # Arguments
///
/// * `bytes` - The encoded file contents.
///
/// # Returns
///
/// The decoded grayscale image.
///
/// # Example
///
/// ```
/// use graymap_io::pgm::decode_image_pgm;
///
/// let image = decode_image_pgm(b"P5\n# a comment\n2 1\n255\n\x00\xff").unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 1);
/// assert_eq!(image.as_slice(), &[0, 255]);
/// ```
pub fn decode_image_pgm(bytes: &[u8]) -> Result<GrayImage, IoError> {
    let mut reader = HeaderReader::new(bytes);

    reader.read_magic()?;
    let width = reader.read_number("width")? as usize;
    let height = reader.read_number("height")? as usize;
    let maxval = reader.read_number("maxval")?;
    if maxval == 0 || maxval > PIX_MAX as u32 {
        return Err(IoError::InvalidMaxval(maxval));
    }
    reader.read_single_whitespace()?;

    let expected = width
        .checked_mul(height)
        .ok_or(IoError::InvalidHeader("size"))?;
    let pixels = reader.remaining();
    if pixels.len() < expected {
        return Err(IoError::Truncated {
            expected,
            found: pixels.len(),
        });
    }

    log::debug!("decoded pgm header: {width}x{height}, maxval {maxval}");

    Ok(GrayImage::from_data(
        ImageSize { width, height },
        maxval as u8,
        pixels[..expected].to_vec(),
    )?)
}

/// Encode an image as a binary PGM (`P5`) file.
///
/// The header is always written as `P5\n<width> <height>\n<maxval>\n`.
pub fn encode_image_pgm(image: &GrayImage) -> Vec<u8> {
    let header = format!(
        "P5\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.maxval()
    );

    let mut bytes = Vec::with_capacity(header.len() + image.as_slice().len());
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(image.as_slice());
    bytes
}

/// Read a binary PGM (`P5`) image from a file.
///
/// # Arguments
///
/// * `file_path` - The path to the PGM file.
///
/// # Returns
///
/// The grayscale image stored in the file.
///
/// # Errors
///
/// Fails if the file does not exist or cannot be read, or if its contents are not a valid
/// 8-bit binary graymap. I/O failures keep the underlying OS error.
pub fn read_image_pgm(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = fs::read(file_path)?;
    decode_image_pgm(&bytes)
}

/// Write an image to a binary PGM (`P5`) file.
///
/// # Arguments
///
/// * `file_path` - The path to the PGM file.
/// * `image` - The image to store.
///
/// # Errors
///
/// On failure a partial file may be left behind; it must not be treated as a valid image.
pub fn write_image_pgm(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    let bytes = encode_image_pgm(image);
    fs::write(file_path.as_ref(), &bytes)?;

    log::debug!(
        "wrote {} bytes to {}",
        bytes.len(),
        file_path.as_ref().display()
    );

    Ok(())
}
