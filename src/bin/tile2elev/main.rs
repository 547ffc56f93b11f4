// tile2elev - Inspect a GSI dem_png elevation tile
//
// Pipeline:
//   1. Load PNG, drop alpha
//   2. Decode every pixel to meters (linear renderer coefficients or the
//      provider's reference rule)
//   3. Print size and elevation statistics
//
// Usage: cargo run --bin tile2elev -- <tile.png> [--exaggeration K] [--reference]

mod grid;

use std::env;
use std::process;

use gsi_terrain::{Decoding, ElevationDecoder, Error, TileStats};

struct Args {
    path: String,
    decoding: Decoding,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let path = args.get(1)?.clone();
    let mut exaggeration = 1.0f64;
    let mut reference = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--exaggeration" => {
                exaggeration = args.get(i + 1)?.parse().ok().filter(|k: &f64| k.is_finite())?;
                i += 2;
            }
            "--reference" => { reference = true; i += 1; }
            _ => return None,
        }
    }

    let decoding = if reference {
        Decoding::Reference
    } else {
        Decoding::Linear(ElevationDecoder::with_exaggeration(exaggeration))
    };
    Some(Args { path, decoding })
}

fn run(args: &Args) -> Result<(), Error> {
    let img = image::open(&args.path).map_err(|e| Error::Image(e.to_string()))?;
    log::info!("loaded {} ({}x{})", args.path, img.width(), img.height());

    let heights = grid::decode_grid(&img, args.decoding);
    let stats = TileStats::from_elevations(heights.iter());
    let (rows, cols) = heights.dim();

    println!("{}: {}x{} ({:?})", args.path, cols, rows, args.decoding);
    println!("  min     {:.2} m", stats.min);
    println!("  max     {:.2} m", stats.max);
    println!("  mean    {:.2} m", stats.mean);
    println!("  no-data {}", stats.no_data);
    Ok(())
}

fn main() {
    env_logger::init();

    let argv: Vec<String> = env::args().collect();
    let Some(args) = parse_args(&argv) else {
        let name = argv.first().map_or("tile2elev", String::as_str);
        eprintln!("Usage: {name} <tile.png> [--exaggeration K] [--reference]");
        process::exit(1);
    };

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
