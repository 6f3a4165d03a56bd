mod analytics;
mod config;
mod db;
mod errors;
mod export;
mod ingest;
mod insights;
mod models;
mod run;
mod sample;
mod tracker;
mod ui;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let interactive = args.len() == 1;
    init_logging(interactive)?;

    let db_path = config::db_path()?;
    let mut db = db::Database::open(&db_path)?;
    let tracker = tracker::BudgetTracker::from_goals(db.get_goals()?);
    log::debug!("Loaded {} budget goals", tracker.goals().len());

    if interactive {
        run::as_tui(&mut db, tracker)
    } else {
        run::as_cli(&args, &mut db, tracker)
    }
}

/// `RUST_LOG` controls the level. The TUI owns the terminal, so it logs to a
/// file in the data directory instead of stderr.
fn init_logging(interactive: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if interactive {
        let path = config::log_path()?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
