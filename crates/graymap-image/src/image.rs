use crate::error::ImageError;
use crate::instrument::{Counter, Recorder};

/// The largest gray level a pixel can hold.
pub const PIX_MAX: u8 = 255;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use graymap_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// assert_eq!(image_size.num_pixels(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Allocate a vector of `len` copies of `val`, reporting allocation failure as an error
/// instead of aborting.
pub fn try_filled_vec<T: Clone>(len: usize, val: T) -> Result<Vec<T>, ImageError> {
    let bytes = len.saturating_mul(std::mem::size_of::<T>());
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| ImageError::Allocation(bytes))?;
    data.resize(len, val);
    Ok(data)
}

/// An 8-bit grayscale image.
///
/// The pixels are stored in a single buffer in raster scan order: left to right within a
/// row, rows from top to bottom. Pixel `(x, y)` lives at index `y * width + x`.
/// A pixel with level `maxval` is pure white, `0` is pure black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    size: ImageSize,
    maxval: u8,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new black image.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `maxval` - The gray level of white, in (0, 255].
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidMaxval`] if `maxval` is zero and
    /// [`ImageError::Allocation`] if the pixel buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use graymap_image::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::new(ImageSize { width: 10, height: 20 }, 255).unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// assert!(image.as_slice().iter().all(|&p| p == 0));
    /// ```
    pub fn new(size: ImageSize, maxval: u8) -> Result<Self, ImageError> {
        Self::from_size_val(size, maxval, 0)
    }

    /// Create a new image with every pixel set to `val`.
    pub fn from_size_val(size: ImageSize, maxval: u8, val: u8) -> Result<Self, ImageError> {
        if maxval == 0 {
            return Err(ImageError::InvalidMaxval(maxval));
        }

        let data = try_filled_vec(size.num_pixels(), val)?;

        Ok(Self { size, maxval, data })
    }

    /// Create a new image from pixel data in raster scan order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, or `maxval` is zero,
    /// an error is returned.
    pub fn from_data(size: ImageSize, maxval: u8, data: Vec<u8>) -> Result<Self, ImageError> {
        if maxval == 0 {
            return Err(ImageError::InvalidMaxval(maxval));
        }

        if data.len() != size.num_pixels() {
            return Err(ImageError::InvalidDataLength(data.len(), size.num_pixels()));
        }

        Ok(Self { size, maxval, data })
    }

    /// Get the size of the image in pixels.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the gray level of white.
    #[inline]
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Get the pixel data in raster scan order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the mutable pixel data in raster scan order.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Check if pixel position (x, y) is inside the image.
    #[inline]
    pub fn valid_position(&self, x: usize, y: usize) -> bool {
        x < self.size.width && y < self.size.height
    }

    /// Check if the rectangle (x, y, w, h) is inside the image.
    ///
    /// Both the top-left corner `(x, y)` and the far corner `(x + w, y + h)` must be valid
    /// positions, so a rectangle can never reach the last column or row.
    ///
    /// # Examples
    ///
    /// ```
    /// use graymap_image::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::new(ImageSize { width: 4, height: 4 }, 255).unwrap();
    ///
    /// assert!(image.valid_rect(0, 0, 3, 3));
    /// assert!(!image.valid_rect(0, 0, 4, 4));
    /// assert!(!image.valid_rect(1, 1, 3, 1));
    /// ```
    pub fn valid_rect(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        match (x.checked_add(w), y.checked_add(h)) {
            (Some(x1), Some(y1)) => self.valid_position(x, y) && self.valid_position(x1, y1),
            _ => false,
        }
    }

    /// Linear index of pixel (x, y). The caller must have validated the position.
    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.valid_position(x, y));
        y * self.size.width + x
    }

    fn check_position(&self, x: usize, y: usize) -> Result<(), ImageError> {
        if !self.valid_position(x, y) {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }
        Ok(())
    }

    /// Get the gray level at position (x, y).
    ///
    /// Counts one [`Counter::PixelAccess`].
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the position is outside the image.
    #[inline]
    pub fn get_pixel<R: Recorder + ?Sized>(
        &self,
        x: usize,
        y: usize,
        rec: &mut R,
    ) -> Result<u8, ImageError> {
        self.check_position(x, y)?;
        rec.record(Counter::PixelAccess, 1);
        Ok(self.data[self.index(x, y)])
    }

    /// Set the gray level at position (x, y).
    ///
    /// The level is stored as given: no clamping against `maxval` is done.
    /// Counts one [`Counter::PixelAccess`].
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the position is outside the image.
    #[inline]
    pub fn set_pixel<R: Recorder + ?Sized>(
        &mut self,
        x: usize,
        y: usize,
        level: u8,
        rec: &mut R,
    ) -> Result<(), ImageError> {
        self.check_position(x, y)?;
        rec.record(Counter::PixelAccess, 1);
        let idx = self.index(x, y);
        self.data[idx] = level;
        Ok(())
    }
}
