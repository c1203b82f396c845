//! Design cost calculator in the terminal.
//!
//! Run with: cargo run -p example-design-cost
//!
//! Logs go to `design-cost.log` (see `DESIGN_COST_LOG_FILE` and
//! `DESIGN_COST_LOG`), since the form takes over the terminal.

mod config;

use std::fs::File;
use std::sync::Mutex;

use config::Config;
use design_cost::{FormFrontend, LogSubmitter};
use design_cost_ratatui_form::RatatuiFormBackend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let log_file = File::create(&cfg.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cfg.log_filter)?)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    tracing::info!(?cfg, "starting");

    let backend = RatatuiFormBackend::new();
    match backend.collect(&cfg.copy(), &LogSubmitter::new()) {
        Ok(answers) => {
            println!("=== Enquiry sent ===");
            println!("{}", serde_json::to_string_pretty(&answers)?);
            println!("Thanks, {}! We'll be in touch.", answers.first_name);
        }
        Err(err) if err.is_cancelled() => {
            println!("Cancelled.");
        }
        Err(err) => {
            tracing::error!(%err, "form failed");
            return Err(err.into());
        }
    }

    Ok(())
}
