//! Configuration management for opview synthesis runs.
//!
//! This module defines the `Config` struct and related functionality for
//! controlling a synthesis run. The configuration can be loaded from a YAML
//! file, created programmatically, or assembled from command-line arguments.
//!
//! The `debug` toggle lives here deliberately: the synthesizer never reads
//! ambient process state, so a run is fully described by its `Config`.
//!
//! # Examples
//!
//! ```no_run
//! use opview_core::config::Config;
//!
//! // Create a new config programmatically
//! let mut config = Config::new("my-project", "petstore.model.yaml");
//! config.target = "scala_client".to_string();
//! config.include_all = true;
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;
use url::Url;

/// Configuration for a view-model synthesis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project name
    pub project_name: String,

    /// Path or URL of the parsed API description
    pub model_path: String,

    /// File the enriched model is written to; stdout when absent
    #[serde(default)]
    pub output_path: Option<String>,

    /// Target dialect for synthesis
    #[serde(default = "default_target")]
    pub target: String,

    /// Emit per-operation synthesis traces
    #[serde(default)]
    pub debug: bool,

    /// Whether to include all operations by default
    #[serde(default)]
    pub include_all: bool,

    /// List of operations to include (if include_all is false)
    #[serde(default)]
    pub include_operations: Vec<String>,

    /// List of operations to exclude
    #[serde(default)]
    pub exclude_operations: Vec<String>,

    /// Overrides the model's base path when present
    pub base_url: Option<Url>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(project_name: impl Into<String>, model_path: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            model_path: model_path.into(),
            output_path: None,
            target: default_target(),
            debug: false,
            include_all: false,
            include_operations: Vec::new(),
            exclude_operations: Vec::new(),
            base_url: None,
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Whether an operation passes the include/exclude filter
    pub fn includes(&self, operation_id: &str) -> bool {
        if self
            .exclude_operations
            .iter()
            .any(|excluded| excluded == operation_id)
        {
            return false;
        }
        if self.include_all || self.include_operations.is_empty() {
            return true;
        }
        self.include_operations
            .iter()
            .any(|included| included == operation_id)
    }
}

fn default_target() -> String {
    "scala_cask".to_string()
}
