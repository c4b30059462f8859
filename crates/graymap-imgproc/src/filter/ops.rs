use graymap_image::{try_filled_vec, Counter, GrayImage, ImageError, Recorder};

use super::BlurWindow;

/// The algorithm used to compute a windowed mean filter.
///
/// All methods produce the same image; they trade memory for speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlurMethod {
    /// Sum every pixel of every window from a snapshot of the image.
    /// Cost O(width * height * window area), one extra image of memory.
    Naive,
    /// Sum each window row from per-row prefix sums.
    /// Cost O(width * height * window height), one `u64` per pixel of memory.
    RowPrefix,
    /// Sum each window from a 2-D summed-area table in constant time.
    /// Cost O(width * height), one `u64` per pixel of memory.
    #[default]
    SummedArea,
}

impl std::fmt::Display for BlurMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            BlurMethod::Naive => "naive",
            BlurMethod::RowPrefix => "row-prefix",
            BlurMethod::SummedArea => "summed-area",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for BlurMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(BlurMethod::Naive),
            "row-prefix" => Ok(BlurMethod::RowPrefix),
            "summed-area" => Ok(BlurMethod::SummedArea),
            _ => Err(format!(
                "unknown blur method `{s}`, expected one of: naive, row-prefix, summed-area"
            )),
        }
    }
}

/// Blur an image in place with a (2dx+1)x(2dy+1) mean filter.
///
/// Each pixel is replaced by the rounded mean of the pixels in the rectangle
/// `[x - dx, x + dx] x [y - dy, y + dy]` clamped to the image. The result does not depend
/// on `method`, only the cost does.
///
/// # Arguments
///
/// * `img` - The image to blur.
/// * `dx` - The horizontal half-width of the window.
/// * `dy` - The vertical half-width of the window.
/// * `method` - The algorithm used to compute the window sums.
/// * `rec` - The recorder for pixel access and addition counts.
///
/// # Errors
///
/// Returns [`ImageError::Allocation`] if the working buffer cannot be allocated, in which
/// case the image is left untouched.
///
/// # Example
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::filter::{mean_blur, BlurMethod};
///
/// let mut image = GrayImage::from_data([3, 1].into(), 255, vec![0, 90, 0]).unwrap();
///
/// mean_blur(&mut image, 1, 0, BlurMethod::SummedArea, &mut NoopRecorder).unwrap();
/// assert_eq!(image.as_slice(), &[45, 30, 45]);
/// ```
pub fn mean_blur<R: Recorder + ?Sized>(
    img: &mut GrayImage,
    dx: usize,
    dy: usize,
    method: BlurMethod,
    rec: &mut R,
) -> Result<(), ImageError> {
    log::debug!(
        "mean blur {} of {} with half-widths ({dx}, {dy})",
        method,
        img.size()
    );

    match method {
        BlurMethod::Naive => mean_blur_naive(img, dx, dy, rec),
        BlurMethod::RowPrefix => mean_blur_row_prefix(img, dx, dy, rec),
        BlurMethod::SummedArea => mean_blur_summed_area(img, dx, dy, rec),
    }
}

/// Blur an image in place by summing every window directly.
///
/// The windows are read from an unmodified snapshot of the image, so results never feed
/// into later windows. See [`mean_blur`] for the filter definition.
pub fn mean_blur_naive<R: Recorder + ?Sized>(
    img: &mut GrayImage,
    dx: usize,
    dy: usize,
    rec: &mut R,
) -> Result<(), ImageError> {
    let mut snapshot_data = try_filled_vec(img.as_slice().len(), 0u8)?;
    snapshot_data.copy_from_slice(img.as_slice());
    let snapshot = GrayImage::from_data(img.size(), img.maxval(), snapshot_data)?;

    for y in 0..img.height() {
        for x in 0..img.width() {
            let window = BlurWindow::clamped(x, y, dx, dy, img.size());

            let mut sum = 0u64;
            for row in window.y0..=window.y1 {
                for col in window.x0..=window.x1 {
                    rec.record(Counter::PixelAdd, 1);
                    sum += snapshot.get_pixel(col, row, rec)? as u64;
                }
            }

            img.set_pixel(x, y, window.mean(sum), rec)?;
        }
    }

    Ok(())
}

/// Blur an image in place using per-row prefix sums.
///
/// `sums[y * width + x]` holds the sum of row `y` from column 0 to `x`. The sum of a
/// window row is then one lookup, minus a second one unless the window starts at
/// column 0. See [`mean_blur`] for the filter definition.
pub fn mean_blur_row_prefix<R: Recorder + ?Sized>(
    img: &mut GrayImage,
    dx: usize,
    dy: usize,
    rec: &mut R,
) -> Result<(), ImageError> {
    let (width, height) = (img.width(), img.height());

    let mut sums = try_filled_vec(width * height, 0u64)?;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            sums[idx] = img.get_pixel(x, y, rec)? as u64;
            if x != 0 {
                rec.record(Counter::PixelAdd, 1);
                sums[idx] += sums[idx - 1];
            }
        }
    }

    for y in 0..height {
        for x in 0..width {
            let window = BlurWindow::clamped(x, y, dx, dy, img.size());

            let mut sum = 0u64;
            for row in window.y0..=window.y1 {
                rec.record(Counter::PixelAdd, 1);
                sum += sums[row * width + window.x1];

                if window.x0 != 0 {
                    rec.record(Counter::PixelAdd, 1);
                    sum -= sums[row * width + window.x0 - 1];
                }
            }

            img.set_pixel(x, y, window.mean(sum), rec)?;
        }
    }

    Ok(())
}

/// Blur an image in place using a summed-area table.
///
/// `table[y * width + x]` holds the sum of the rectangle from (0, 0) to (x, y) inclusive,
/// so any window sum takes at most four lookups whatever the window size. Terms that
/// would index row or column -1 are skipped. See [`mean_blur`] for the filter definition.
///
/// # Errors
///
/// Returns [`ImageError::Allocation`] if the table cannot be allocated. Entries are
/// 64-bit, so any image that fits in memory fits the table.
pub fn mean_blur_summed_area<R: Recorder + ?Sized>(
    img: &mut GrayImage,
    dx: usize,
    dy: usize,
    rec: &mut R,
) -> Result<(), ImageError> {
    let (width, height) = (img.width(), img.height());

    let mut table = try_filled_vec(width * height, 0u64)?;
    if table.is_empty() {
        return Ok(());
    }

    // first row: plain running sum
    for x in 0..width {
        let pixel = img.get_pixel(x, 0, rec)? as u64;
        table[x] = if x == 0 {
            pixel
        } else {
            rec.record(Counter::PixelAdd, 1);
            pixel + table[x - 1]
        };
    }

    // remaining rows: pixel + above + left - above-left
    for y in 1..height {
        for x in 0..width {
            let idx = y * width + x;
            let pixel = img.get_pixel(x, y, rec)? as u64;

            rec.record(Counter::PixelAdd, 1);
            let mut acc = pixel + table[idx - width];

            if x != 0 {
                rec.record(Counter::PixelAdd, 2);
                acc = acc + table[idx - 1] - table[idx - width - 1];
            }

            table[idx] = acc;
        }
    }

    for y in 0..height {
        for x in 0..width {
            let BlurWindow { x0, y0, x1, y1 } = BlurWindow::clamped(x, y, dx, dy, img.size());

            // bottom-right + top-left - top-right - bottom-left, added before subtracting
            let mut sum = table[y1 * width + x1];

            if x0 != 0 && y0 != 0 {
                rec.record(Counter::PixelAdd, 1);
                sum += table[(y0 - 1) * width + x0 - 1];
            }

            if y0 != 0 {
                rec.record(Counter::PixelAdd, 1);
                sum -= table[(y0 - 1) * width + x1];
            }

            if x0 != 0 {
                rec.record(Counter::PixelAdd, 1);
                sum -= table[y1 * width + x0 - 1];
            }

            let window = BlurWindow { x0, y0, x1, y1 };
            img.set_pixel(x, y, window.mean(sum), rec)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{mean_blur, BlurMethod};
    use graymap_image::{Counter, Counters, GrayImage, ImageError, NoopRecorder};

    const METHODS: [BlurMethod; 3] = [
        BlurMethod::Naive,
        BlurMethod::RowPrefix,
        BlurMethod::SummedArea,
    ];

    #[test]
    fn test_blur_uniform_unchanged() -> Result<(), ImageError> {
        for method in METHODS {
            for (dx, dy) in [(0, 0), (1, 1), (3, 7), (40, 20), (100, 100)] {
                let mut image = GrayImage::from_size_val([20, 15].into(), 255, 255)?;
                mean_blur(&mut image, dx, dy, method, &mut NoopRecorder)?;
                assert!(
                    image.as_slice().iter().all(|&p| p == 255),
                    "{method} changed a uniform image with ({dx}, {dy})"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_blur_zero_window_is_identity() -> Result<(), ImageError> {
        let data = (0..20u8).map(|v| v * 7).collect::<Vec<_>>();
        let original = GrayImage::from_data([5, 4].into(), 255, data)?;
        for method in METHODS {
            let mut image = original.clone();
            mean_blur(&mut image, 0, 0, method, &mut NoopRecorder)?;
            assert_eq!(image, original, "{method}");
        }
        Ok(())
    }

    #[test]
    fn test_blur_known_values() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let data = vec![
            0, 0, 0,
            0, 90, 0,
            0, 0, 0,
        ];
        // corners see 4 pixels, edges 6, center 9
        #[rustfmt::skip]
        let expected = [
            23, 15, 23,
            15, 10, 15,
            23, 15, 23,
        ];
        for method in METHODS {
            let mut image = GrayImage::from_data([3, 3].into(), 255, data.clone())?;
            mean_blur(&mut image, 1, 1, method, &mut NoopRecorder)?;
            assert_eq!(image.as_slice(), &expected, "{method}");
        }
        Ok(())
    }

    #[test]
    fn test_blur_reads_original_values() -> Result<(), ImageError> {
        // a running filter that reused its own output would smear the step to the right
        for method in METHODS {
            let mut image = GrayImage::from_data([4, 1].into(), 255, vec![100, 0, 0, 0])?;
            mean_blur(&mut image, 1, 0, method, &mut NoopRecorder)?;
            assert_eq!(image.as_slice(), &[50, 33, 0, 0], "{method}");
        }
        Ok(())
    }

    #[test]
    fn test_blur_empty_image() -> Result<(), ImageError> {
        for method in METHODS {
            let mut image = GrayImage::new([0, 0].into(), 255)?;
            mean_blur(&mut image, 2, 2, method, &mut NoopRecorder)?;
            let mut image = GrayImage::new([3, 0].into(), 255)?;
            mean_blur(&mut image, 2, 2, method, &mut NoopRecorder)?;
        }
        Ok(())
    }

    #[test]
    fn test_blur_counts() -> Result<(), ImageError> {
        // 3x1 image, window half-width 1 along x: windows of 2, 3 and 2 pixels
        let image = GrayImage::from_data([3, 1].into(), 255, vec![3, 6, 9])?;

        let mut counters = Counters::new();
        super::mean_blur_naive(&mut image.clone(), 1, 0, &mut counters)?;
        assert_eq!(counters.get(Counter::PixelAdd), 7);
        assert_eq!(counters.get(Counter::PixelAccess), 7 + 3);

        // build: 2 adds, query: 1 + 1 + 2 lookups
        let mut counters = Counters::new();
        super::mean_blur_row_prefix(&mut image.clone(), 1, 0, &mut counters)?;
        assert_eq!(counters.get(Counter::PixelAdd), 2 + 4);
        assert_eq!(counters.get(Counter::PixelAccess), 3 + 3);

        // build: 2 adds on the first row, query: only bottom-left corrections for x0 != 0
        let mut counters = Counters::new();
        super::mean_blur_summed_area(&mut image.clone(), 1, 0, &mut counters)?;
        assert_eq!(counters.get(Counter::PixelAdd), 2 + 1);
        assert_eq!(counters.get(Counter::PixelAccess), 3 + 3);
        Ok(())
    }

    #[test]
    fn test_blur_tall_image_beyond_32_bit_sums() -> Result<(), ImageError> {
        // 17M white pixels sum to more than u32::MAX
        let height = 17_000_000;
        let mut original = GrayImage::from_size_val([1, height].into(), 255, 255)?;
        original.set_pixel(0, 10, 0, &mut NoopRecorder)?;
        original.set_pixel(0, height - 1, 0, &mut NoopRecorder)?;

        for method in METHODS {
            let mut image = original.clone();
            mean_blur(&mut image, 0, 1, method, &mut NoopRecorder)?;

            let pixels = image.as_slice();
            // (255 + 255 + 0) / 3 next to the dark pixel
            assert_eq!(&pixels[8..13], &[255, 170, 170, 170, 255], "{method}");
            // the last window holds 2 pixels: (255 + 0) / 2 = 127.5
            assert_eq!(&pixels[height - 3..], &[255, 170, 128], "{method}");
            assert!(pixels[13..height - 3].iter().all(|&p| p == 255), "{method}");
        }
        Ok(())
    }

    #[test]
    fn test_blur_method_from_str() {
        for method in METHODS {
            assert_eq!(method.to_string().parse::<BlurMethod>(), Ok(method));
        }
        assert!("gaussian".parse::<BlurMethod>().is_err());
        assert_eq!(BlurMethod::default(), BlurMethod::SummedArea);
    }
}
