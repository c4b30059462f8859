use argh::FromArgs;
use std::path::{Path, PathBuf};

use graymap::image::{Counter, Counters, GrayImage};
use graymap::imgproc::{
    filter::{mean_blur, BlurMethod},
    search::locate_sub_image,
};
use graymap::io::pgm::read_image_pgm;

#[derive(FromArgs)]
/// Measure the cost of image operations with the instrumentation counters
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Locate(LocateArgs),
    Blur(BlurArgs),
}

#[derive(FromArgs)]
/// Run the best and worst case sub-image searches over the generated test images
#[argh(subcommand, name = "locate")]
struct LocateArgs {
    /// directory holding the images written by graymap-generate
    #[argh(option, short = 'd', default = "PathBuf::from(\"./test\")")]
    dir: PathBuf,
}

#[derive(FromArgs)]
/// Blur one image with every mean blur algorithm and compare their cost
#[argh(subcommand, name = "blur")]
struct BlurArgs {
    /// path to a binary PGM image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// horizontal half-width of the blur window
    #[argh(option, default = "40")]
    dx: usize,

    /// vertical half-width of the blur window
    #[argh(option, default = "20")]
    dy: usize,

    /// run a single method: naive, row-prefix or summed-area (default: all three)
    #[argh(option, short = 'm')]
    method: Option<BlurMethod>,
}

fn load(dir: &Path, name: &str) -> Result<GrayImage, Box<dyn std::error::Error>> {
    let path = dir.join(name);
    let img = read_image_pgm(&path).map_err(|e| format!("loading {}: {e}", path.display()))?;
    Ok(img)
}

fn run_locate(args: &LocateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut counters = Counters::new();

    let dot = load(&args.dir, "dot.pgm")?;
    let square = load(&args.dir, "square.pgm")?;
    let white = load(&args.dir, "white.pgm")?;
    let white_sm = load(&args.dir, "white_sm.pgm")?;
    let subimg = load(&args.dir, "subimg.pgm")?;
    let subimg_sm = load(&args.dir, "subimg_sm.pgm")?;

    let cases = [
        ("best case", "square", &square, "dot", &dot),
        ("best case", "white", &white, "square", &square),
        ("worst case", "white_sm", &white_sm, "subimg_sm", &subimg_sm),
        ("worst case", "white", &white, "subimg", &subimg),
        ("identical", "white", &white, "white", &white),
        ("identical", "white_sm", &white_sm, "white_sm", &white_sm),
    ];

    for (label, big_name, big, small_name, small) in cases {
        counters.reset();
        let found = locate_sub_image(big, small, &mut counters)?;
        log::info!(
            "locate {label}: {small_name} ({}) in {big_name} ({}): {found:?}",
            small.size(),
            big.size()
        );
        counters.report();
    }

    Ok(())
}

fn run_blur(args: &BlurArgs) -> Result<(), Box<dyn std::error::Error>> {
    let image = read_image_pgm(&args.image_path)?;
    let mut counters = Counters::new();

    let methods = match args.method {
        Some(method) => vec![method],
        None => vec![
            BlurMethod::SummedArea,
            BlurMethod::RowPrefix,
            BlurMethod::Naive,
        ],
    };

    let mut results = Vec::new();
    for method in methods {
        let mut blurred = image.clone();
        counters.reset();
        mean_blur(&mut blurred, args.dx, args.dy, method, &mut counters)?;
        log::info!(
            "blur {method} ({}) with window ({}x{}): {} additions",
            image.size(),
            args.dx,
            args.dy,
            counters.get(Counter::PixelAdd)
        );
        counters.report();
        results.push((method, blurred));
    }

    if let Some(((first_method, first), rest)) = results.split_first() {
        for (method, blurred) in rest {
            if blurred != first {
                return Err(format!("{method} and {first_method} blur results differ").into());
            }
        }
    }

    if results.len() > 1 {
        log::info!("all blur methods agree");
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    match &args.command {
        Command::Locate(locate) => run_locate(locate),
        Command::Blur(blur) => run_blur(blur),
    }
}
