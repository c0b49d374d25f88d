//! POCT1-A message inspector binary.

use std::process::ExitCode;

use poct_inspect::{load_messages_from_path, write_report, InspectConfig, ReportRow};
use poct_message::check_batch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = InspectConfig::from_env(std::env::args().nth(1));
    tracing::info!("Loading messages from: {}", config.messages_path.display());

    let messages = load_messages_from_path(&config.messages_path)?;
    tracing::info!("Loaded {} messages", messages.len());

    let reports = check_batch(&messages, &config.conformance);
    let rows: Vec<ReportRow> = messages
        .iter()
        .zip(&reports)
        .map(|(message, report)| ReportRow::new(message, report))
        .collect();

    write_report(std::io::stdout().lock(), &rows)?;

    let failing = reports.iter().filter(|r| !r.is_conformant()).count();
    if failing > 0 {
        tracing::warn!("{} of {} messages have violations", failing, messages.len());
    } else {
        tracing::info!("All {} messages conform", messages.len());
    }

    if config.strict && failing > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
