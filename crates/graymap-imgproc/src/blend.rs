use graymap_image::{GrayImage, ImageError, Recorder};

fn check_fits(dst: &GrayImage, x: usize, y: usize, src: &GrayImage) -> Result<(), ImageError> {
    if !dst.valid_rect(x, y, src.width(), src.height()) {
        return Err(ImageError::InvalidRect {
            x,
            y,
            width: src.width(),
            height: src.height(),
        });
    }
    Ok(())
}

/// Paste an image into a larger image at position (x, y), in place.
///
/// The pixels of `src` overwrite the pixels of `dst`; no blending is done.
///
/// # Arguments
///
/// * `dst` - The image to paste into.
/// * `x` - The column of the top-left corner of the pasted region.
/// * `y` - The row of the top-left corner of the pasted region.
/// * `src` - The image to paste.
/// * `rec` - The recorder for pixel access counts.
///
/// # Errors
///
/// Returns [`ImageError::InvalidRect`] if the rectangle `(x, y, src.width, src.height)` is
/// not inside `dst`.
///
/// # Examples
///
/// ```
/// use graymap_image::{GrayImage, NoopRecorder};
/// use graymap_imgproc::blend::paste;
///
/// let mut dst = GrayImage::new([3, 3].into(), 255).unwrap();
/// let src = GrayImage::from_size_val([1, 1].into(), 255, 9).unwrap();
///
/// paste(&mut dst, 1, 1, &src, &mut NoopRecorder).unwrap();
/// assert_eq!(dst.as_slice(), &[0, 0, 0, 0, 9, 0, 0, 0, 0]);
/// ```
pub fn paste<R: Recorder + ?Sized>(
    dst: &mut GrayImage,
    x: usize,
    y: usize,
    src: &GrayImage,
    rec: &mut R,
) -> Result<(), ImageError> {
    check_fits(dst, x, y, src)?;

    for y0 in 0..src.height() {
        for x0 in 0..src.width() {
            let pixel = src.get_pixel(x0, y0, rec)?;
            dst.set_pixel(x + x0, y + y0, pixel, rec)?;
        }
    }

    Ok(())
}

/// Blend an image into a larger image at position (x, y), in place.
///
/// Each covered pixel becomes `round(dst * (1 - alpha) + src * alpha)`, saturated to
/// `[0, dst.maxval]`. `alpha` usually lies in `[0, 1]`, values outside that interval are
/// accepted and saturate.
///
/// # Errors
///
/// Returns [`ImageError::InvalidRect`] if `src` does not fit inside `dst` at `(x, y)`.
pub fn blend<R: Recorder + ?Sized>(
    dst: &mut GrayImage,
    x: usize,
    y: usize,
    src: &GrayImage,
    alpha: f64,
    rec: &mut R,
) -> Result<(), ImageError> {
    check_fits(dst, x, y, src)?;

    let maxval = dst.maxval() as f64;

    for y0 in 0..src.height() {
        for x0 in 0..src.width() {
            let pixel1 = dst.get_pixel(x + x0, y + y0, rec)? as f64;
            let pixel2 = src.get_pixel(x0, y0, rec)? as f64;

            let blended = (pixel1 * (1.0 - alpha) + pixel2 * alpha).round();

            dst.set_pixel(x + x0, y + y0, blended.clamp(0.0, maxval) as u8, rec)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use graymap_image::{Counter, Counters, GrayImage, ImageError, NoopRecorder};

    #[test]
    fn test_paste() -> Result<(), ImageError> {
        let mut dst = GrayImage::new([4, 3].into(), 255)?;
        let src = GrayImage::from_data([2, 1].into(), 255, vec![7, 8])?;
        let mut counters = Counters::new();

        super::paste(&mut dst, 1, 1, &src, &mut counters)?;

        #[rustfmt::skip]
        let expected = [
            0, 0, 0, 0,
            0, 7, 8, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(dst.as_slice(), &expected);
        // one read and one write per pasted pixel
        assert_eq!(counters.get(Counter::PixelAccess), 4);
        Ok(())
    }

    #[test]
    fn test_paste_rejects_far_corner() -> Result<(), ImageError> {
        let mut dst = GrayImage::new([4, 4].into(), 255)?;
        let src = GrayImage::from_size_val([2, 2].into(), 255, 1)?;

        // (2, 2) + (2, 2) lands on (4, 4), outside the image
        assert_eq!(
            super::paste(&mut dst, 2, 2, &src, &mut NoopRecorder),
            Err(ImageError::InvalidRect {
                x: 2,
                y: 2,
                width: 2,
                height: 2
            })
        );
        assert!(dst.as_slice().iter().all(|&p| p == 0));
        Ok(())
    }

    #[test]
    fn test_blend_half() -> Result<(), ImageError> {
        let mut dst = GrayImage::from_data([3, 2].into(), 255, vec![0, 100, 0, 0, 0, 0])?;
        let src = GrayImage::from_data([2, 1].into(), 255, vec![200, 51])?;
        let mut counters = Counters::new();

        super::blend(&mut dst, 0, 0, &src, 0.5, &mut counters)?;

        // (0 + 200) / 2 = 100, (100 + 51) / 2 = 75.5 -> 76
        assert_eq!(dst.as_slice(), &[100, 76, 0, 0, 0, 0]);
        assert_eq!(counters.get(Counter::PixelAccess), 6);
        Ok(())
    }

    #[test]
    fn test_blend_alpha_saturates() -> Result<(), ImageError> {
        let src = GrayImage::from_data([2, 1].into(), 255, vec![250, 0])?;

        let mut over = GrayImage::from_data([3, 2].into(), 200, vec![100, 100, 0, 0, 0, 0])?;
        super::blend(&mut over, 0, 0, &src, 2.0, &mut NoopRecorder)?;
        // 100 * -1 + 250 * 2 = 400 -> maxval, 100 * -1 + 0 = -100 -> 0
        assert_eq!(&over.as_slice()[..2], &[200, 0]);

        let mut under = GrayImage::from_data([3, 2].into(), 255, vec![100, 100, 0, 0, 0, 0])?;
        super::blend(&mut under, 0, 0, &src, -1.0, &mut NoopRecorder)?;
        // 100 * 2 - 250 = -50 -> 0, 100 * 2 - 0 = 200
        assert_eq!(&under.as_slice()[..2], &[0, 200]);
        Ok(())
    }

    #[test]
    fn test_blend_alpha_one_is_paste() -> Result<(), ImageError> {
        let src = GrayImage::from_data([2, 2].into(), 255, vec![1, 2, 3, 4])?;
        let mut blended = GrayImage::from_size_val([5, 5].into(), 255, 77)?;
        let mut pasted = blended.clone();

        super::blend(&mut blended, 2, 1, &src, 1.0, &mut NoopRecorder)?;
        super::paste(&mut pasted, 2, 1, &src, &mut NoopRecorder)?;
        assert_eq!(blended, pasted);
        Ok(())
    }
}
