//! Staging ETL binary.
//!
//! Copies the joined Sakila payments into `<db>.payments_staging` once and exits.

use tracing::info;
use tracing_subscriber::EnvFilter;

use staging_etl::{Dependencies, EtlError, EtlSettings, LogFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), EtlError> {
    dotenv::dotenv().ok();

    let settings = EtlSettings::from_env()?;
    init_tracing(&settings);

    info!(namespace = %settings.target.namespace(), "Starting staging ETL");

    let dependencies = Dependencies::new(&settings).await?;
    let summary = dependencies.orchestrator.run().await?;

    println!(
        "Loaded {} documents into MongoDB staging: {}",
        summary.load.inserted,
        settings.target.namespace()
    );

    Ok(())
}

/// Logs go to stderr so stdout carries only the load summary line.
fn init_tracing(settings: &EtlSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match settings.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
