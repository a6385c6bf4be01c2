//! Orchestrator module for the staging ETL pipeline.
//!
//! Coordinates the extractor, transformer, and loader components.

use tracing::{error, info, instrument, warn};

use crate::errors::PipelineError;
use crate::extractor::PaymentExtractor;
use crate::loader::{LoadSummary, StagingLoader};
use crate::reporter::{StagingReport, StagingReporter};
use crate::transformer::PaymentTransformer;

/// Configuration for the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
    /// Run the revenue report against the collection after a successful load.
    pub report_after_load: bool,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Rows returned by the extract query.
    pub rows_extracted: usize,
    /// What the loader did.
    pub load: LoadSummary,
    /// Revenue report, when enabled and successful.
    pub report: Option<StagingReport>,
}

/// Orchestrator that runs the pipeline once.
///
/// The orchestrator:
/// - Runs extract, transform and load strictly in sequence
/// - Stops at the first failing stage
/// - Releases the staging store on every exit path
pub struct Orchestrator {
    extractor: PaymentExtractor,
    transformer: PaymentTransformer,
    loader: StagingLoader,
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(
        extractor: PaymentExtractor,
        transformer: PaymentTransformer,
        loader: StagingLoader,
    ) -> Self {
        Self::with_config(extractor, transformer, loader, OrchestratorConfig::default())
    }

    /// Create a new orchestrator with custom configuration.
    pub fn with_config(
        extractor: PaymentExtractor,
        transformer: PaymentTransformer,
        loader: StagingLoader,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            extractor,
            transformer,
            loader,
            config,
        }
    }

    /// Run extract, transform and load once.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        info!("Starting staging ETL run");

        let outcome = self.run_stages().await;
        self.loader.release().await;

        match &outcome {
            Ok(summary) => info!(
                rows_extracted = summary.rows_extracted,
                inserted = summary.load.inserted,
                "Staging ETL run complete"
            ),
            Err(e) => error!(error = %e, "Staging ETL run failed"),
        }

        outcome
    }

    async fn run_stages(&self) -> Result<RunSummary, PipelineError> {
        let rows = self.extractor.extract().await?;
        let rows_extracted = rows.len();

        let documents = self.transformer.transform_batch(rows)?;

        let load = self.loader.load(documents).await?;

        let report = if self.config.report_after_load {
            // The load has already replaced the collection; a report failure
            // must not turn the run into a failure.
            match StagingReporter::new(self.loader.store()).summarize().await {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!(error = %e, "Staging report failed");
                    None
                }
            }
        } else {
            None
        };

        Ok(RunSummary {
            rows_extracted,
            load,
            report,
        })
    }
}
