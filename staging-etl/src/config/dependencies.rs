//! Dependency initialization and wiring for the staging ETL.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::EtlSettings;
use crate::EtlError;
use staging_etl_pipeline::{
    extractor::PaymentExtractor,
    loader::StagingLoader,
    orchestrator::{Orchestrator, OrchestratorConfig},
    transformer::PaymentTransformer,
};
use staging_etl_repository::{MongoStagingStore, MySqlPaymentSource, StagingStore};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Build the source, the target and the pipeline around them.
    ///
    /// The MySQL connection is opened lazily by the extract step. The MongoDB
    /// client is connected and pinged here so a bad target fails the run before
    /// any rows are read.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(EtlError)` - If the target is unreachable or unhealthy
    pub async fn new(settings: &EtlSettings) -> Result<Self, EtlError> {
        info!(
            mysql_host = %settings.source.host,
            mysql_port = settings.source.port,
            mysql_database = %settings.source.database,
            mongo_namespace = %settings.target.namespace(),
            report_after_load = settings.report_after_load,
            "Initializing dependencies"
        );

        let source = MySqlPaymentSource::new(&settings.source);

        let store = MongoStagingStore::connect(&settings.target).await?;

        let healthy = match store.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                store.shutdown().await;
                return Err(EtlError::config(format!("MongoDB health check failed: {}", e)));
            }
        };

        if !healthy {
            warn!("MongoDB ping did not report ok");
            store.shutdown().await;
            return Err(EtlError::config("MongoDB deployment is unhealthy"));
        }

        info!("MongoDB connection verified");

        let extractor = PaymentExtractor::new(Arc::new(source));
        let transformer = PaymentTransformer::new();
        let loader = StagingLoader::new(Arc::new(store));

        let orchestrator = Orchestrator::with_config(
            extractor,
            transformer,
            loader,
            OrchestratorConfig {
                report_after_load: settings.report_after_load,
            },
        );

        Ok(Self { orchestrator })
    }
}
