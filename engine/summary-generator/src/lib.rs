//! Summary Generator - offline scouting-content scripts
//!
//! Two scripts feed the dashboard's derived JSON files: one writes a
//! free-text scouting summary per player, the other a fixed-shape
//! three-stat analysis. Both prompt a local `ollama` process and treat
//! any single-player failure as skip-and-continue; the output file is
//! whatever subset succeeded. The query layer never calls back into
//! this crate - the only contract is the shape of the files written.

pub mod averages;
pub mod config;
pub mod ollama;
pub mod prompt;
pub mod types;

pub use averages::{per_game_averages, PerGameAverages};
pub use config::GeneratorConfig;
pub use ollama::{extract_json, OllamaClient};
pub use types::{PlayerAnalysis, PlayerSummary, StatAnalysis, StatHighlight};
