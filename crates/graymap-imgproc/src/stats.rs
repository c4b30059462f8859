use graymap_image::{Counter, GrayImage, Recorder};

/// Find the minimum and maximum gray levels of an image.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `rec` - The recorder for pixel access counts.
///
/// # Returns
///
/// `(min, max)`, or `None` if the image has no pixels.
///
/// # Example
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::stats::min_max;
///
/// let image = GrayImage::from_data([2, 2].into(), 255, vec![40, 7, 200, 13]).unwrap();
///
/// assert_eq!(min_max(&image, &mut NoopRecorder), Some((7, 200)));
/// ```
pub fn min_max<R: Recorder + ?Sized>(image: &GrayImage, rec: &mut R) -> Option<(u8, u8)> {
    let (&first, rest) = image.as_slice().split_first()?;

    let stats = rest.iter().fold((first, first), |(min, max), &pixel| {
        (min.min(pixel), max.max(pixel))
    });

    rec.record(Counter::PixelAccess, image.as_slice().len() as u64);

    Some(stats)
}
