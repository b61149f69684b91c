//! Read files through a progress bar, one bar per file.
//!
//! Walks the given path and streams every regular file through a bar via
//! `io::copy`, with the bar acting as the byte-counting destination.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::Result;
use headway::{BarBuilder, Color, Indicator};
use walkdir::WalkDir;

#[derive(Debug, Parser)]
#[command(about = "Render a progress bar while reading files")]
struct Args {
    /// File or directory to read.
    path: PathBuf,

    /// Indicator after the bar: percent, size, rate, elapsed, remaining, none.
    #[arg(short = 'k', long, default_value = "percent")]
    indicator: String,

    /// Foreground color name or palette code.
    #[arg(short, long)]
    foreground: Option<String>,

    /// Background color name or palette code.
    #[arg(short, long)]
    background: Option<String>,

    /// Bar width in cells.
    #[arg(short, long, default_value_t = headway::DEFAULT_WIDTH)]
    width: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let indicator: Indicator = args.indicator.parse()?;
    let foreground: Option<Color> = args.foreground.as_deref().map(str::parse).transpose()?;
    let background: Option<Color> = args.background.as_deref().map(str::parse).transpose()?;

    for entry in WalkDir::new(&args.path) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        read_file(entry.path(), &args, indicator, foreground, background)?;
    }
    Ok(())
}

fn read_file(
    path: &Path,
    args: &Args,
    indicator: Indicator,
    foreground: Option<Color>,
    background: Option<Color>,
) -> Result<()> {
    let file = File::open(path)?;
    let total = file.metadata()?.len() as i64;
    if total == 0 {
        return Ok(());
    }

    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut builder = BarBuilder::new()
        .label(label)
        .width(args.width)
        .fill(b'#')
        .space(b'-')
        .delimiters(b'[', b']')
        .indicator(indicator);
    if console::colors_enabled() {
        if let Some(color) = foreground {
            builder = builder.foreground(color);
        }
        if let Some(color) = background {
            builder = builder.background(color);
        }
    }

    let mut bar = builder.build(total)?;
    let mut reader = io::BufReader::new(file);
    io::copy(&mut reader, &mut bar)?;
    bar.complete();
    println!();
    Ok(())
}
