use std::path::PathBuf;

use cfoplan::{App, AppConfig, init_logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cfoplan")]
#[command(about = "A terminal dashboard for startup budget scenarios")]
struct Args {
    /// Path to the data directory (default: ~/.cfoplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Directory exported reports are written to (default: <data-dir>/reports)
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Seconds between live expense feed polls
    #[arg(short, long)]
    poll_interval: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cfoplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = AppConfig::load_or_default(&data_dir)
        .with_overrides(args.poll_interval, args.export_dir);
    let mut app = App::new(&config, &data_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");
    Ok(())
}
