mod batch;
mod error;
mod fetcher;
mod input;
mod normalize;
mod output;
mod parser;
mod progress;
mod settings;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;

use fetcher::HttpFetcher;
use progress::BarProgress;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "wiki_websites",
    version,
    about = "Look up company websites from Wikipedia infoboxes"
)]
struct Cli {
    /// CSV file with one Wikipedia article URL per row (first column, no header)
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(output = %settings.output.display(), user_agent = %settings.user_agent, "settings loaded");

    let fetcher = HttpFetcher::new(&settings.user_agent)?;
    let progress = BarProgress::new();
    let summary = batch::run(&cli.input, &settings.output, &fetcher, &progress)?;

    println!(
        "Done: {} pages ({} websites found, {} N/A) -> {}",
        summary.total,
        summary.found,
        summary.missing,
        settings.output.display()
    );
    println!("Finished in {}", format_duration(t0.elapsed()));
    Ok(())
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
