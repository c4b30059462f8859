use graymap_image::{GrayImage, ImageError, ImageSize, Recorder};

/// Rotate the input image 90 degrees anticlockwise.
///
/// The result has the width and height of the source swapped. Source pixel `(x, y)` lands
/// at `(y, src.width - 1 - x)` of the result, so the top row of the source becomes the
/// left column of the result read bottom-up.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `rec` - The recorder for pixel access counts.
///
/// # Returns
///
/// A new rotated image. The source is not modified.
///
/// # Example
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::rotate::rotate_90_ccw;
///
/// // 0 1 2
/// // 3 4 5
/// let image = GrayImage::from_data([3, 2].into(), 255, vec![0, 1, 2, 3, 4, 5]).unwrap();
///
/// let rotated = rotate_90_ccw(&image, &mut NoopRecorder).unwrap();
///
/// // 2 5
/// // 1 4
/// // 0 3
/// assert_eq!(rotated.width(), 2);
/// assert_eq!(rotated.height(), 3);
/// assert_eq!(rotated.as_slice(), &[2, 5, 1, 4, 0, 3]);
/// ```
pub fn rotate_90_ccw<R: Recorder + ?Sized>(
    src: &GrayImage,
    rec: &mut R,
) -> Result<GrayImage, ImageError> {
    let rotated_size = ImageSize {
        width: src.height(),
        height: src.width(),
    };
    let mut dst = GrayImage::new(rotated_size, src.maxval())?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let pixel = src.get_pixel(x, y, rec)?;
            dst.set_pixel(y, src.width() - 1 - x, pixel, rec)?;
        }
    }

    Ok(dst)
}
