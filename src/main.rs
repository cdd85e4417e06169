use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use randart::art::{generate_art, generate_noise};
use randart::rng::SeededRng;

const DEFAULT_SIZE: u32 = 350;

#[derive(Debug, Parser)]
#[command(name = "randart")]
#[command(about = "Seed-locked expression-tree art generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate one or more art images.
    Generate {
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        width: u32,
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        height: u32,
        /// Seed for reproducible output; omitted = drawn from the clock.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of images to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
        /// Directory the images are written into.
        #[arg(short = 'o', long = "out-dir", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Write a random-noise test image (PNG encoder smoke check).
    Noise {
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        width: u32,
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        height: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short = 'o', long = "output", default_value = "noise.png")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Bare invocation: two fixed-size pieces into the current directory.
        None => run_generate(DEFAULT_SIZE, DEFAULT_SIZE, None, 2, PathBuf::from(".")),
        Some(Commands::Generate {
            width,
            height,
            seed,
            count,
            out_dir,
        }) => run_generate(width, height, seed, count, out_dir),
        Some(Commands::Noise {
            width,
            height,
            seed,
            output,
        }) => run_noise(width, height, seed, &output),
    }
}

fn run_generate(
    width: u32,
    height: u32,
    seed: Option<u64>,
    count: u32,
    out_dir: PathBuf,
) -> Result<()> {
    let (seed, mut rng) = resolve_seed(seed);

    for index in 1..=count {
        let path = out_dir.join(format!("art-{index}.png"));
        eprintln!("rendering {} ({width}x{height})", path.display());
        generate_art(&mut rng, width, height, &path)?;
        println!("Wrote {} (seed {seed})", path.display());
    }
    Ok(())
}

fn run_noise(width: u32, height: u32, seed: Option<u64>, output: &Path) -> Result<()> {
    let (seed, mut rng) = resolve_seed(seed);
    generate_noise(&mut rng, width, height, output)?;
    println!("Wrote {} (seed {seed})", output.display());
    Ok(())
}

fn resolve_seed(seed: Option<u64>) -> (u64, SeededRng) {
    match seed {
        Some(seed) => (seed, SeededRng::from_seed(seed)),
        None => SeededRng::from_entropy(),
    }
}
