use graymap_image::{Counter, GrayImage, Recorder};

/// Apply a binary threshold to an image, in place.
///
/// Pixels with level `>= thr` become white (`maxval`), all others become black (0).
///
/// # Arguments
///
/// * `img` - The image to threshold.
/// * `thr` - The threshold level.
/// * `rec` - The recorder for pixel access counts.
///
/// # Examples
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::threshold::threshold;
///
/// let data = vec![100u8, 200, 50, 150, 99, 250];
/// let mut image = GrayImage::from_data([2, 3].into(), 255, data).unwrap();
///
/// threshold(&mut image, 100, &mut NoopRecorder);
/// assert_eq!(image.as_slice(), &[255, 255, 0, 255, 0, 255]);
/// ```
pub fn threshold<R: Recorder + ?Sized>(img: &mut GrayImage, thr: u8, rec: &mut R) {
    let maxval = img.maxval();
    let num_pixels = img.as_slice().len();

    img.as_slice_mut().iter_mut().for_each(|pixel| {
        *pixel = if *pixel >= thr { maxval } else { 0 };
    });

    rec.record(Counter::PixelAccess, num_pixels as u64);
}
