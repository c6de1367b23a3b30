//! Document store connection helper.
//!
//! The connection is opened once at startup and handed to the repositories
//! by reference; nothing in the process keeps authoritative state outside
//! the store.

use mongodb::{Client, Database};

use crate::domain::ports::StorageError;

/// Connection endpoint used when `MONGODB_URL` is unset.
pub const DEFAULT_STORE_URL: &str = "mongodb://localhost:27017";

/// Database name used when `MONGODB_DATABASE` is unset.
pub const DEFAULT_DATABASE: &str = "gazette";

/// Configuration for the document store connection.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    url: String,
    database: String,
}

impl StoreConfig {
    /// Create a configuration with the given endpoint and database name.
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
        }
    }

    /// Connection endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_URL, DEFAULT_DATABASE)
    }
}

/// Open a client against the configured endpoint and select the database.
///
/// # Errors
///
/// Returns [`StorageError::Connection`] when the endpoint cannot be parsed
/// or the client cannot be constructed.
pub async fn connect(config: &StoreConfig) -> Result<Database, StorageError> {
    let client = Client::with_uri_str(config.url())
        .await
        .map_err(|error| StorageError::connection(error.to_string()))?;
    Ok(client.database(config.database()))
}
