use graymap_image::{GrayImage, ImageError, Recorder};

/// Mirror the input image horizontally (flip left-right).
///
/// # Arguments
///
/// * `src` - The input image.
/// * `rec` - The recorder for pixel access counts.
///
/// # Returns
///
/// A new mirrored image with the same size and maxval. The source is not modified.
///
/// # Example
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::flip::mirror_horizontal;
///
/// let image = GrayImage::from_data([3, 2].into(), 255, vec![0, 1, 2, 3, 4, 5]).unwrap();
///
/// let mirrored = mirror_horizontal(&image, &mut NoopRecorder).unwrap();
///
/// assert_eq!(mirrored.as_slice(), &[2, 1, 0, 5, 4, 3]);
/// ```
pub fn mirror_horizontal<R: Recorder + ?Sized>(
    src: &GrayImage,
    rec: &mut R,
) -> Result<GrayImage, ImageError> {
    let mut dst = GrayImage::new(src.size(), src.maxval())?;
    let width = src.width();

    for y in 0..src.height() {
        for x in 0..width {
            let pixel = src.get_pixel(x, y, rec)?;
            dst.set_pixel(width - 1 - x, y, pixel, rec)?;
        }
    }

    Ok(dst)
}
