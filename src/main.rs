use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use statpic::{TableImageGenerator, TableSpec};

/// Render a leaderboard table described by a JSON file to a PNG image.
#[derive(Parser, Debug)]
#[command(name = "statpic", version, about)]
struct Args {
    /// JSON file with the table contents (header, sub_header, leaderboard)
    spec: PathBuf,

    /// Optional side thumbnail to place next to the leaderboard body
    #[arg(long)]
    side_image: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "table.png")]
    out: PathBuf,
}

#[derive(Deserialize)]
struct SpecFile {
    header: Vec<String>,
    sub_header: String,
    leaderboard: Vec<Vec<String>>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.spec)
        .with_context(|| format!("reading spec file {}", args.spec.display()))?;
    let file: SpecFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing spec file {}", args.spec.display()))?;

    let side_image = match &args.side_image {
        Some(path) => Some(
            image::open(path)
                .with_context(|| format!("loading side image {}", path.display()))?
                .to_rgba8(),
        ),
        None => None,
    };

    let spec = TableSpec::new(file.header, file.sub_header, file.leaderboard, side_image)?;
    let png = TableImageGenerator::new()?.generate(&spec)?;

    std::fs::write(&args.out, &png)
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("Wrote {} ({} bytes)", args.out.display(), png.len());
    Ok(())
}
