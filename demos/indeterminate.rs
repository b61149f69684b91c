//! Animate an indeterminate bar from a ticker loop.
//!
//! The bar has no total; a scrolling or bouncing window shows that work is
//! still happening while random increments arrive.

use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::bail;
use color_eyre::Result;
use headway::{BarBuilder, Color, Indicator, Mode};
use rand::Rng;
use tokio::time;

#[derive(Debug, Parser)]
#[command(about = "Animate an indeterminate progress bar")]
struct Args {
    /// Animation mode: scroll or bounce.
    #[arg(short, long, default_value = "scroll")]
    mode: String,

    /// Delay between ticks, in milliseconds.
    #[arg(short, long, default_value_t = 100)]
    wait: u64,

    /// How long to run, in seconds.
    #[arg(short, long, default_value_t = 10)]
    run: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let mode: Mode = args.mode.parse()?;
    let builder = BarBuilder::new()
        .label("working...")
        .width(16)
        .fill(b'#')
        .space(b'-')
        .delimiters(b'[', b']')
        .indicator(Indicator::Elapsed)
        .foreground(Color::DarkGreen);
    let mut bar = match mode {
        Mode::Scrolling => builder.scrolling()?,
        Mode::Bouncing => builder.bouncing()?,
        Mode::Regular => bail!("a regular bar needs a total; pick scroll or bounce"),
    };

    let deadline = time::Instant::now() + Duration::from_secs(args.run);
    let mut ticker = time::interval(Duration::from_millis(args.wait.max(1)));
    let mut rng = rand::rng();
    loop {
        ticker.tick().await;
        bar.incr(rng.random_range(0..10));
        if time::Instant::now() >= deadline {
            bar.complete();
            break;
        }
    }
    println!();
    Ok(())
}
