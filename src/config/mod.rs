//! Configuration loading for the dashboard engine.
//!
//! Everything here is optional: a default `DashboardConfig` runs the
//! in-memory backend with no deadline. YAML example:
//!
//! ```yaml
//! query:
//!   timeout_ms: 5000
//! mongodb:
//!   uri: mongodb://localhost:27017
//!   database: salesdash
//!   collection: sales
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Query execution settings.
    #[serde(default)]
    pub query: QuerySettings,

    /// MongoDB connection settings; absent means in-memory only.
    #[serde(default)]
    pub mongodb: Option<MongoConfig>,
}

/// Settings applied by the query executor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuerySettings {
    /// Deadline for each store round-trip, in milliseconds. Absent means
    /// no engine-imposed deadline (the caller's request deadline governs).
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Connection settings for the MongoDB backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    pub uri: String,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_database() -> String {
    "salesdash".to_string()
}

fn default_collection() -> String {
    "sales".to_string()
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The configured query deadline, if any.
    pub fn query_timeout(&self) -> Option<Duration> {
        self.query.timeout_ms.map(Duration::from_millis)
    }
}
