use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::types::{
    GameLog, PlayerBio, PlayerMeasurements, ScoutRanking, ScoutingReport, SeasonLog,
};

/// The full prospect dataset as shipped in the source JSON document
///
/// Top-level keys mirror the wire file; all collections join on
/// `playerId`. The dataset is parsed once at startup and treated as
/// read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftDataset {
    #[serde(rename = "bio")]
    pub bios: Vec<PlayerBio>,
    #[serde(rename = "scoutRankings")]
    pub scout_rankings: Vec<ScoutRanking>,
    pub measurements: Vec<PlayerMeasurements>,
    pub game_logs: Vec<GameLog>,
    #[serde(rename = "seasonLogs")]
    pub season_logs: Vec<SeasonLog>,
    #[serde(rename = "scoutingReports")]
    pub scouting_reports: Vec<ScoutingReport>,
}

impl DraftDataset {
    /// Load and parse the dataset from a JSON file
    ///
    /// Malformed JSON is fatal: the error propagates to the caller and
    /// startup aborts.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading prospect dataset from: {:?}", path.as_ref());

        let json_content = std::fs::read_to_string(&path)?;
        let dataset = Self::from_json_str(&json_content)?;

        info!(
            "Loaded {} bios, {} rankings, {} measurements, {} game logs, {} season logs, {} reports",
            dataset.bios.len(),
            dataset.scout_rankings.len(),
            dataset.measurements.len(),
            dataset.game_logs.len(),
            dataset.season_logs.len(),
            dataset.scouting_reports.len()
        );

        Ok(dataset)
    }

    /// Parse the dataset from an in-memory JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
