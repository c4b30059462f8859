use graymap_image::{GrayImage, ImageError, ImageSize, Recorder};

/// Crop an image to a specified region.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
/// * `w` - The width of the region.
/// * `h` - The height of the region.
/// * `rec` - The recorder for pixel access counts.
///
/// # Errors
///
/// Returns [`ImageError::InvalidRect`] unless `src.valid_rect(x, y, w, h)` holds.
///
/// # Examples
///
/// ```rust
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::crop::crop;
///
/// let image = GrayImage::from_data([4, 4].into(), 255, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let cropped = crop(&image, 1, 1, 2, 2, &mut NoopRecorder).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop<R: Recorder + ?Sized>(
    src: &GrayImage,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
    rec: &mut R,
) -> Result<GrayImage, ImageError> {
    if !src.valid_rect(x, y, w, h) {
        return Err(ImageError::InvalidRect {
            x,
            y,
            width: w,
            height: h,
        });
    }

    let mut dst = GrayImage::new(
        ImageSize {
            width: w,
            height: h,
        },
        src.maxval(),
    )?;

    for j in 0..h {
        for i in 0..w {
            let pixel = src.get_pixel(x + i, y + j, rec)?;
            dst.set_pixel(i, j, pixel, rec)?;
        }
    }

    Ok(dst)
}
