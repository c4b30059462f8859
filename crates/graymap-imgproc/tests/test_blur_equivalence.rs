use graymap_image::{GrayImage, ImageError, NoopRecorder};
use graymap_imgproc::filter::{mean_blur, BlurMethod};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_image(rng: &mut StdRng, width: usize, height: usize) -> Result<GrayImage, ImageError> {
    let maxval: u8 = rng.random_range(1..=255);
    let data = (0..width * height)
        .map(|_| rng.random_range(0..=maxval))
        .collect();
    GrayImage::from_data([width, height].into(), maxval, data)
}

fn blur_all(image: &GrayImage, dx: usize, dy: usize) -> Result<[GrayImage; 3], ImageError> {
    let mut naive = image.clone();
    mean_blur(&mut naive, dx, dy, BlurMethod::Naive, &mut NoopRecorder)?;

    let mut row_prefix = image.clone();
    mean_blur(&mut row_prefix, dx, dy, BlurMethod::RowPrefix, &mut NoopRecorder)?;

    let mut summed_area = image.clone();
    mean_blur(&mut summed_area, dx, dy, BlurMethod::SummedArea, &mut NoopRecorder)?;

    Ok([naive, row_prefix, summed_area])
}

#[test]
fn test_blur_methods_agree_on_random_images() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..60 {
        let width = rng.random_range(1..=24);
        let height = rng.random_range(1..=24);
        let dx = rng.random_range(0..=30);
        let dy = rng.random_range(0..=30);

        let image = random_image(&mut rng, width, height)?;
        let [naive, row_prefix, summed_area] = blur_all(&image, dx, dy)?;

        assert_eq!(
            naive, row_prefix,
            "naive and row-prefix differ for {width}x{height} with ({dx}, {dy})"
        );
        assert_eq!(
            naive, summed_area,
            "naive and summed-area differ for {width}x{height} with ({dx}, {dy})"
        );
    }

    Ok(())
}

#[test]
fn test_blur_methods_agree_on_thin_images() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(11);

    for (width, height) in [(1, 1), (1, 17), (17, 1), (2, 31)] {
        for (dx, dy) in [(0, 0), (0, 3), (3, 0), (1, 1), (50, 50)] {
            let image = random_image(&mut rng, width, height)?;
            let [naive, row_prefix, summed_area] = blur_all(&image, dx, dy)?;
            assert_eq!(naive, row_prefix);
            assert_eq!(naive, summed_area);
        }
    }

    Ok(())
}

#[test]
fn test_blur_keeps_size_and_maxval() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(3);
    let image = random_image(&mut rng, 13, 9)?;

    for blurred in blur_all(&image, 2, 4)? {
        assert_eq!(blurred.size(), image.size());
        assert_eq!(blurred.maxval(), image.maxval());
        assert!(blurred.as_slice().iter().all(|&p| p <= image.maxval()));
    }

    Ok(())
}
