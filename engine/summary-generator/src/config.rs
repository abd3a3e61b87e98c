//! Configuration for the generator scripts

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Settings shared by both generator binaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Ollama model to run
    pub model: String,
    /// Per-call timeout (seconds)
    pub timeout_secs: u64,
    /// Pause between consecutive generations (milliseconds)
    pub pause_ms: u64,
    /// Source dataset file
    pub dataset_path: PathBuf,
    /// Directory the generated JSON files are written to
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "llama3".to_string(),
            timeout_secs: 60,
            pause_ms: 1000,
            dataset_path: PathBuf::from("data/intern_project_data.json"),
            output_dir: PathBuf::from("data/generated"),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &str) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from file when present, defaults otherwise
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Loaded generator config from {path}");
                config
            }
            Err(_) => {
                info!("No config at {path}, using defaults");
                Self::default()
            }
        }
    }
}
