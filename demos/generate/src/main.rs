use argh::FromArgs;
use std::path::{Path, PathBuf};

use graymap::image::{GrayImage, ImageError, NoopRecorder, PIX_MAX};
use graymap::io::pgm::write_image_pgm;

/// The set of images to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Dot,
    Square,
    White,
    SubImg,
    All,
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(Kind::Dot),
            "square" => Ok(Kind::Square),
            "white" => Ok(Kind::White),
            "subimg" => Ok(Kind::SubImg),
            "all" => Ok(Kind::All),
            _ => Err(format!(
                "invalid kind `{s}`, expected one of: dot, square, white, subimg, all"
            )),
        }
    }
}

#[derive(FromArgs)]
/// Generate the standard test images as binary PGM files
struct Args {
    /// which images to write: dot, square, white, subimg or all
    #[argh(positional)]
    kind: Kind,

    /// directory the images are written to
    #[argh(option, short = 'o', default = "PathBuf::from(\"./test\")")]
    output_dir: PathBuf,
}

fn white(size: usize) -> Result<GrayImage, ImageError> {
    GrayImage::from_size_val([size, size].into(), PIX_MAX, PIX_MAX)
}

// 1x1 black pixel
fn dot() -> Result<GrayImage, ImageError> {
    let mut img = GrayImage::new([1, 1].into(), PIX_MAX)?;
    img.set_pixel(0, 0, 0, &mut NoopRecorder)?;
    Ok(img)
}

// white with a black main diagonal
fn square() -> Result<GrayImage, ImageError> {
    let mut img = white(200)?;
    for i in 0..img.width() {
        img.set_pixel(i, i, 0, &mut NoopRecorder)?;
    }
    Ok(img)
}

// white with a black bottom-right corner
fn sub_image(size: usize) -> Result<GrayImage, ImageError> {
    let mut img = white(size)?;
    img.set_pixel(size - 1, size - 1, 0, &mut NoopRecorder)?;
    Ok(img)
}

fn images_for(kind: Kind) -> Result<Vec<(&'static str, GrayImage)>, ImageError> {
    let images = match kind {
        Kind::Dot => vec![("dot.pgm", dot()?)],
        Kind::Square => vec![("square.pgm", square()?)],
        Kind::White => vec![("white.pgm", white(200)?), ("white_sm.pgm", white(100)?)],
        Kind::SubImg => vec![
            ("subimg.pgm", sub_image(100)?),
            ("subimg_sm.pgm", sub_image(50)?),
        ],
        Kind::All => {
            let mut images = Vec::new();
            for kind in [Kind::Dot, Kind::Square, Kind::White, Kind::SubImg] {
                images.extend(images_for(kind)?);
            }
            images
        }
    };
    Ok(images)
}

fn write_all(
    dir: &Path,
    images: &[(&'static str, GrayImage)],
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    for (name, img) in images {
        let path = dir.join(name);
        write_image_pgm(&path, img)?;
        log::info!("wrote {} ({})", path.display(), img.size());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let images = images_for(args.kind)?;
    write_all(&args.output_dir, &images)?;

    log::info!("Image(s) generated successfully!");

    Ok(())
}
