use graymap_image::{Counter, GrayImage, ImageError, Recorder};

/// Transform an image into its photographic negative, in place.
///
/// Each pixel becomes `maxval - pixel`, turning dark pixels light and vice versa.
///
/// # Arguments
///
/// * `img` - The image to transform.
/// * `rec` - The recorder for pixel access counts.
///
/// # Example
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::enhance::negative;
///
/// let mut image = GrayImage::from_data([3, 1].into(), 200, vec![0, 50, 200]).unwrap();
///
/// negative(&mut image, &mut NoopRecorder);
/// assert_eq!(image.as_slice(), &[200, 150, 0]);
/// ```
pub fn negative<R: Recorder + ?Sized>(img: &mut GrayImage, rec: &mut R) {
    let maxval = img.maxval();
    let num_pixels = img.as_slice().len();

    img.as_slice_mut()
        .iter_mut()
        .for_each(|pixel| *pixel = maxval.saturating_sub(*pixel));

    rec.record(Counter::PixelAccess, num_pixels as u64);
}

/// Brighten an image by a factor, in place.
///
/// Each pixel is multiplied by `factor`, rounded half away from zero and saturated at
/// `maxval`. A factor above 1.0 brightens the image, below 1.0 darkens it.
///
/// # Arguments
///
/// * `img` - The image to transform.
/// * `factor` - The finite, non-negative scale factor.
/// * `rec` - The recorder for pixel access counts.
///
/// # Errors
///
/// Returns [`ImageError::InvalidFactor`] if `factor` is negative, infinite or NaN.
///
/// # Example
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::enhance::brighten;
///
/// let mut image = GrayImage::from_data([4, 1].into(), 255, vec![0, 5, 100, 200]).unwrap();
///
/// brighten(&mut image, 1.5, &mut NoopRecorder).unwrap();
/// assert_eq!(image.as_slice(), &[0, 8, 150, 255]);
/// ```
pub fn brighten<R: Recorder + ?Sized>(
    img: &mut GrayImage,
    factor: f64,
    rec: &mut R,
) -> Result<(), ImageError> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(ImageError::InvalidFactor(factor));
    }

    let maxval = img.maxval() as f64;
    let num_pixels = img.as_slice().len();

    img.as_slice_mut().iter_mut().for_each(|pixel| {
        *pixel = (*pixel as f64 * factor).round().min(maxval) as u8;
    });

    rec.record(Counter::PixelAccess, num_pixels as u64);

    Ok(())
}
