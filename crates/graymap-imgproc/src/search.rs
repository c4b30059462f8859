use graymap_image::{Counter, GrayImage, ImageError, Recorder};

/// Compare `small` against the region of `big` whose top-left corner is (x, y).
///
/// Pixels are compared row by row and the comparison stops at the first mismatch. Every
/// comparison performed counts one [`Counter::PixelCompare`].
///
/// # Arguments
///
/// * `big` - The image to search in.
/// * `x` - The column of the candidate top-left corner.
/// * `y` - The row of the candidate top-left corner.
/// * `small` - The image to look for.
/// * `rec` - The recorder for pixel access and compare counts.
///
/// # Returns
///
/// `true` if every pixel of `small` equals the co-located pixel of `big`.
///
/// # Errors
///
/// Returns [`ImageError::PixelIndexOutOfBounds`] if (x, y) is not a valid position of `big`,
/// or if `small` runs past the border of `big` before a mismatch is found.
pub fn match_sub_image<R: Recorder + ?Sized>(
    big: &GrayImage,
    x: usize,
    y: usize,
    small: &GrayImage,
    rec: &mut R,
) -> Result<bool, ImageError> {
    if !big.valid_position(x, y) {
        return Err(ImageError::PixelIndexOutOfBounds(
            x,
            y,
            big.width(),
            big.height(),
        ));
    }

    for y0 in 0..small.height() {
        for x0 in 0..small.width() {
            let pixel1 = big.get_pixel(x + x0, y + y0, rec)?;
            let pixel2 = small.get_pixel(x0, y0, rec)?;
            rec.record(Counter::PixelCompare, 1);
            if pixel1 != pixel2 {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Locate a sub-image inside another image.
///
/// Candidate offsets are scanned with x in the outer loop and y in the inner loop, so of
/// several matches the one with the smallest x (then smallest y) is returned.
///
/// # Arguments
///
/// * `big` - The image to search in.
/// * `small` - The image to look for.
/// * `rec` - The recorder for pixel access and compare counts.
///
/// # Returns
///
/// The top-left corner `(x, y)` of the first match, or `None` if there is no match. When
/// `small` is wider or taller than `big` there are no candidates and nothing is compared.
///
/// # Example
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::search::locate_sub_image;
///
/// let mut big = GrayImage::new([5, 5].into(), 255).unwrap();
/// big.set_pixel(3, 2, 9, &mut NoopRecorder).unwrap();
///
/// let small = GrayImage::from_size_val([1, 1].into(), 255, 9).unwrap();
///
/// assert_eq!(locate_sub_image(&big, &small, &mut NoopRecorder).unwrap(), Some((3, 2)));
/// ```
pub fn locate_sub_image<R: Recorder + ?Sized>(
    big: &GrayImage,
    small: &GrayImage,
    rec: &mut R,
) -> Result<Option<(usize, usize)>, ImageError> {
    let (Some(max_x), Some(max_y)) = (
        big.width().checked_sub(small.width()),
        big.height().checked_sub(small.height()),
    ) else {
        return Ok(None);
    };

    // an empty big image has no valid position even for an empty small one
    if big.size().num_pixels() == 0 {
        return Ok(None);
    }

    for x in 0..=max_x {
        for y in 0..=max_y {
            if match_sub_image(big, x, y, small, rec)? {
                return Ok(Some((x, y)));
            }
        }
    }

    Ok(None)
}
