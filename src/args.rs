use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adivina", about = "Guess-the-number with persistent per-player statistics")]
pub struct Args {
    /// Lower bound of the secret range (inclusive)
    #[arg(long, default_value_t = 1)]
    pub min: u32,

    /// Upper bound of the secret range (inclusive)
    #[arg(long, default_value_t = 100)]
    pub max: u32,

    /// Override the statistics workbook path
    #[arg(long)]
    pub stats_file: Option<PathBuf>,

    /// Override the round-history database path
    #[arg(long)]
    pub db_file: Option<PathBuf>,
}
