use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use adivina::{args::Args, db, stats::sheet, ui::run_ui};

/// Log to a file: the alternate screen owns stdout while the UI runs.
fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::daily(log_dir, "adivina.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        args.min <= args.max,
        "--min ({}) must not exceed --max ({})",
        args.min,
        args.max
    );

    let db_path = match &args.db_file {
        Some(path) => path.clone(),
        None => db::get_db_path()?,
    };

    let log_dir = db_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir);
    let _guard = init_tracing(&log_dir)?;
    tracing::info!("starting adivina, secret range [{}, {}]", args.min, args.max);

    let stats_path = match &args.stats_file {
        Some(path) => path.clone(),
        None => sheet::default_stats_path()?,
    };
    let stats = sheet::load(&stats_path)
        .with_context(|| format!("failed to load {}", stats_path.display()))?;

    let pool = db::create_pool(&db_path).await?;

    run_ui(args.min, args.max, stats, stats_path, pool)
}
