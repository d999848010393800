use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::PathBuf;

use tasky::config::Config;
use tasky::logger::Logger;
use tasky::services::ReminderScheduler;
use tasky::storage::LocalStorage;
use tasky::ui;

fn print_usage() {
    eprintln!("Usage: tasky [--generate-config [PATH]] [--import FILE]");
    eprintln!();
    eprintln!("  --generate-config [PATH]  Write the default configuration and exit");
    eprintln!("  --import FILE             Import todos from a JSON file before starting");
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let mut import: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                let path = match args.next() {
                    Some(path) => PathBuf::from(path),
                    None => Config::get_default_config_path()?,
                };
                Config::generate_default_config(&path)?;
                return Ok(());
            }
            "--import" => match args.next() {
                Some(path) => import = Some(PathBuf::from(path)),
                None => {
                    eprintln!("❌ Error: --import needs a file");
                    print_usage();
                    return Ok(());
                }
            },
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("❌ Error: unknown argument '{}'", other);
                print_usage();
                return Ok(());
            }
        }
    }

    let config = Config::load()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(LevelFilter::Info)?;

    let storage = LocalStorage::new(Some(&config.database_path()?))
        .await
        .context("Failed to open todo database")?;

    if let Some(path) = import {
        let count = storage.import_file(&path).await?;
        log::info!("Imported {} todos from {}", count, path.display());
    }

    if !storage.has_data().await? {
        log::info!("No todos yet; import some with --import FILE");
    }

    let (scheduler, reminder_rx) = ReminderScheduler::new(config.notifications.enabled);

    // Run the TUI application
    ui::run_app(&config, storage, scheduler, reminder_rx, logger).await?;

    Ok(())
}
