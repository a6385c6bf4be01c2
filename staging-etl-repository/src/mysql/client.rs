//! MySQL payment source client.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info, instrument, warn};

use crate::config::SourceConfig;
use crate::errors::SourceError;
use crate::interfaces::PaymentSource;
use crate::mysql::queries::EXTRACT_PAYMENTS_QUERY;
use crate::mysql::row::decode_row;
use staging_etl_shared::SourceRow;

/// Payment source backed by a MySQL database holding the Sakila schema.
///
/// Holds connection options only; a connection is opened per
/// [`fetch_payments`](PaymentSource::fetch_payments) call and closed before it
/// returns.
pub struct MySqlPaymentSource {
    options: MySqlConnectOptions,
}

impl MySqlPaymentSource {
    /// Build a source from connection parameters. Does not connect.
    pub fn new(config: &SourceConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Configured MySQL payment source"
        );

        Self { options }
    }

    async fn connect(&self) -> Result<MySqlConnection, SourceError> {
        self.options
            .connect()
            .await
            .map_err(|e| SourceError::connection(e.to_string()))
    }
}

#[async_trait]
impl PaymentSource for MySqlPaymentSource {
    #[instrument(skip(self))]
    async fn fetch_payments(&self, limit: u32) -> Result<Vec<SourceRow>, SourceError> {
        let mut conn = self.connect().await?;
        debug!("Connected to MySQL");

        let fetched = sqlx::query(EXTRACT_PAYMENTS_QUERY)
            .bind(limit)
            .fetch_all(&mut conn)
            .await;

        // Release before looking at the outcome so the error path closes too.
        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close MySQL connection cleanly");
        }

        let rows = fetched.map_err(|e| SourceError::query(e.to_string()))?;
        let decoded = rows
            .iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(row_count = decoded.len(), "Fetched payment rows");
        Ok(decoded)
    }
}
