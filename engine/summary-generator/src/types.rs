use serde::{Deserialize, Serialize};

/// One generated scouting summary, keyed by player id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub player_id: u32,
    pub summary: String,
}

/// The fixed three-stat analysis shape the model must return
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAnalysis {
    pub player_name: String,
    pub position: String,
    pub analysis: StatAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatAnalysis {
    pub stat1: StatHighlight,
    pub stat2: StatHighlight,
    pub stat3: StatHighlight,
}

/// One highlighted stat with its model-written explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatHighlight {
    pub stat: String,
    pub value: String,
    pub explanation: String,
}
