use graymap_image::ImageSize;

/// The averaging window of a mean filter around one pixel, clamped to the image bounds.
///
/// The window spans the columns `x0..=x1` and the rows `y0..=y1`. All three blur methods
/// derive their windows from [`BlurWindow::clamped`], which is what keeps their results
/// identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlurWindow {
    /// Left column, inclusive.
    pub x0: usize,
    /// Top row, inclusive.
    pub y0: usize,
    /// Right column, inclusive.
    pub x1: usize,
    /// Bottom row, inclusive.
    pub y1: usize,
}

impl BlurWindow {
    /// Compute the window `[x - dx, x + dx] x [y - dy, y + dy]` intersected with the image.
    ///
    /// # Arguments
    ///
    /// * `x` - The column of the target pixel.
    /// * `y` - The row of the target pixel.
    /// * `dx` - The horizontal half-width of the window.
    /// * `dy` - The vertical half-width of the window.
    /// * `size` - The size of the image.
    ///
    /// PRECONDITION: (x, y) lies inside an image of the given size.
    ///
    /// # Example
    ///
    /// ```
    /// use graymap_imgproc::filter::BlurWindow;
    ///
    /// let window = BlurWindow::clamped(1, 8, 2, 3, [10, 10].into());
    ///
    /// assert_eq!((window.x0, window.x1), (0, 3));
    /// assert_eq!((window.y0, window.y1), (5, 9));
    /// assert_eq!(window.num_pixels(), 20);
    /// ```
    #[inline]
    pub fn clamped(x: usize, y: usize, dx: usize, dy: usize, size: ImageSize) -> Self {
        debug_assert!(x < size.width && y < size.height);
        Self {
            x0: x.saturating_sub(dx),
            y0: y.saturating_sub(dy),
            x1: x.saturating_add(dx).min(size.width - 1),
            y1: y.saturating_add(dy).min(size.height - 1),
        }
    }

    /// Number of columns covered by the window.
    #[inline]
    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    /// Number of rows covered by the window.
    #[inline]
    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }

    /// Number of pixels covered by the window.
    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.width() * self.height()
    }

    /// Mean gray level of the window given the sum of its pixels, rounded half away from zero.
    #[inline]
    pub fn mean(&self, sum: u64) -> u8 {
        (sum as f64 / self.num_pixels() as f64).round() as u8
    }
}
