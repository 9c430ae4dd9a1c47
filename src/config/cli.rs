//! CLI argument parsing

use clap::Parser;

/// genre-keys - Musical key distribution by genre
///
/// Reads the song table, buckets songs into Rap, Rock, Pop and Classical by
/// genre keywords, and renders the most common keys per genre as a bar chart
/// grid and a heatmap. Input and output locations are fixed at build time.
#[derive(Parser, Debug)]
#[command(name = "genre-keys")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the log filter directive based on verbosity flags
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
