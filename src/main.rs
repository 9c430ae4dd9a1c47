//! genre-keys CLI entry point

use clap::Parser;
use genre_keys::config::{Cli, Settings};
use genre_keys::pipeline::{self, PipelineResult};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli);

    let settings = Settings::from_cli(&cli);

    match pipeline::run(&settings) {
        Ok(result) => {
            print_summary(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .init();
}

fn print_summary(result: &PipelineResult) {
    println!();
    println!(
        "Summary: {} songs ({} without a usable key), shared axis 0-{}%",
        result.songs, result.unmapped_keys, result.axis_max
    );
    println!();

    for stats in &result.genres {
        let top: Vec<String> = stats
            .top
            .iter()
            .map(|(key, pct)| format!("{} {:.1}%", key, pct))
            .collect();
        println!(
            "  {:<10} {:>6} songs   {}",
            stats.genre.label(),
            stats.song_count(),
            top.join(", ")
        );
    }

    println!();
    for path in &result.outputs {
        println!("✓ Wrote {}", path.display());
    }
}
