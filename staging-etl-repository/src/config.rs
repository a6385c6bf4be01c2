//! Connection configuration for the source and target stores.

use std::fmt;

/// Name of the staging collection in the target database.
pub const STAGING_COLLECTION: &str = "payments_staging";

/// Default MySQL port.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection parameters for the relational payment source.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl SourceConfig {
    /// Create a source config on the default port.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_MYSQL_PORT,
            user: user.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    /// Override the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

// Hand-written so the password never ends up in logs.
impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Connection parameters for the document staging store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl TargetConfig {
    /// Create a target config pointing at the staging collection.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            collection: STAGING_COLLECTION.to_string(),
        }
    }

    /// Fully qualified `database.collection` name.
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_debug_redacts_password() {
        let config = SourceConfig::new("db.internal", "etl", "hunter2", "sakila");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("db.internal"));
    }

    #[test]
    fn test_source_default_port() {
        let config = SourceConfig::new("localhost", "etl", "pw", "sakila");
        assert_eq!(config.port, 3306);
        assert_eq!(config.with_port(3307).port, 3307);
    }

    #[test]
    fn test_target_uses_staging_collection() {
        let config = TargetConfig::new("mongodb://localhost:27017", "sakila_staging");
        assert_eq!(config.collection, "payments_staging");
        assert_eq!(config.namespace(), "sakila_staging.payments_staging");
    }
}
