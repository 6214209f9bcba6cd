//! This module exposes the data source configuration.

use serde::{Deserialize, Serialize};

/// Connection endpoints for a [`crate::repo::DataSource`].
///
/// The DSN format is driver-specific and passed through untouched. When no
/// dedicated write endpoint is configured, writes go to the read endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// DSN of the read connection.
    pub read: String,
    /// DSN of the write connection; defaults to `read` when absent.
    #[serde(default)]
    pub write: Option<String>,
}

impl DataSourceConfig {
    /// Creates a configuration routing reads and writes to `dsn`.
    pub fn single(dsn: impl Into<String>) -> Self {
        Self {
            read: dsn.into(),
            write: None,
        }
    }

    /// DSN finders connect to.
    pub fn read_dsn(&self) -> &str {
        &self.read
    }

    /// DSN mutations connect to.
    pub fn write_dsn(&self) -> &str {
        self.write.as_deref().unwrap_or(&self.read)
    }
}
