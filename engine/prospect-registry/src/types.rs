use serde::{Deserialize, Serialize};

/// Biographical record for a draft prospect
///
/// One record per player; `player_id` is the primary key every other
/// collection in the dataset joins on. Nullable wire fields are modeled
/// as `Option` so that `0` or `""` never masquerades as "missing".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBio {
    /// Unique player identifier
    pub player_id: u32,
    /// Full display name (e.g., "Cooper Flagg")
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    /// Birth date as it appears on the wire (`YYYY-MM-DD`)
    pub birth_date: String,
    /// Height in inches
    pub height: f64,
    /// Weight in pounds
    pub weight: f64,
    #[serde(default)]
    pub high_school: Option<String>,
    #[serde(default)]
    pub high_school_state: Option<String>,
    pub home_town: String,
    #[serde(default)]
    pub home_state: Option<String>,
    pub home_country: String,
    pub nationality: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Team the prospect currently plays for
    pub current_team: String,
    pub league: String,
    pub league_type: String,
    /// Listed position; absent for most records in the source data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// One named scout's integer draft ranking per player, null when that
/// scout has not ranked the player
///
/// The wire keys are the scouts' literal display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutRanking {
    #[serde(rename = "playerId")]
    pub player_id: u32,
    #[serde(rename = "ESPN Rank", default)]
    pub espn: Option<u32>,
    #[serde(rename = "Sam Vecenie Rank", default)]
    pub sam_vecenie: Option<u32>,
    #[serde(rename = "Kevin O'Connor Rank", default)]
    pub kevin_oconnor: Option<u32>,
    #[serde(rename = "Kyle Boone Rank", default)]
    pub kyle_boone: Option<u32>,
    #[serde(rename = "Gary Parrish Rank", default)]
    pub gary_parrish: Option<u32>,
}

impl ScoutRanking {
    /// All named-scout ranks in a fixed order, nulls included
    pub fn ranks(&self) -> [Option<u32>; 5] {
        [self.espn, self.sam_vecenie, self.kevin_oconnor, self.kyle_boone, self.gary_parrish]
    }

    /// Mean of the non-null ranks, `None` when no scout has ranked the player
    ///
    /// Missing ranks are excluded from both the sum and the divisor, so
    /// this is a mean over whichever scouts actually weighed in, not a
    /// mean that treats absence as a worst-case rank.
    pub fn average_rank(&self) -> Option<f64> {
        let ranks: Vec<u32> = self.ranks().into_iter().flatten().collect();
        if ranks.is_empty() {
            return None;
        }
        Some(ranks.iter().map(|&r| f64::from(r)).sum::<f64>() / ranks.len() as f64)
    }
}

/// Combine-style physical measurements, zero-or-one record per player
///
/// Every metric is independently nullable; prospects routinely sit out
/// individual drills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMeasurements {
    pub player_id: u32,
    pub height_no_shoes: Option<f64>,
    pub height_shoes: Option<f64>,
    pub wingspan: Option<f64>,
    pub reach: Option<f64>,
    pub max_vertical: Option<f64>,
    pub no_step_vertical: Option<f64>,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub hand_length: Option<f64>,
    pub hand_width: Option<f64>,
    pub agility: Option<f64>,
    pub sprint: Option<f64>,
    pub shuttle_left: Option<f64>,
    pub shuttle_right: Option<f64>,
    pub shuttle_best: Option<f64>,
}

/// Single-game box score for a prospect
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLog {
    pub player_id: u32,
    pub game_id: u32,
    pub season: u32,
    pub league: String,
    pub date: String,
    pub team: String,
    pub team_id: u32,
    pub opponent_id: u32,
    /// 1 when the prospect's team was the home side, 0 when visiting
    pub is_home: Option<u8>,
    pub opponent: String,
    pub home_team_pts: u32,
    pub visitor_team_pts: u32,
    pub gp: u32,
    pub gs: u32,
    /// Minutes played as an opaque "MM:SS" string
    pub time_played: String,
    pub fgm: u32,
    pub fga: u32,
    #[serde(rename = "fg%")]
    pub fg_pct: Option<f64>,
    pub tpm: u32,
    pub tpa: u32,
    #[serde(rename = "tp%")]
    pub tp_pct: Option<f64>,
    pub ftm: u32,
    pub fta: u32,
    #[serde(rename = "ft%")]
    pub ft_pct: Option<f64>,
    pub oreb: u32,
    pub dreb: u32,
    pub reb: u32,
    pub ast: u32,
    pub stl: u32,
    pub blk: u32,
    pub tov: u32,
    pub pf: u32,
    pub pts: u32,
    pub plus_minus: i32,
    pub rn: u32,
}

/// Season-aggregate box score for one season/team stint
///
/// The source feed mixes key casings (`Season`, `GP`, `"FG%"`), kept
/// verbatim via renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonLog {
    #[serde(rename = "playerId")]
    pub player_id: u32,
    /// Age during the season, a string on the wire
    pub age: String,
    #[serde(rename = "Season")]
    pub season: u32,
    #[serde(rename = "League")]
    pub league: String,
    #[serde(rename = "Team")]
    pub team: String,
    pub w: u32,
    pub l: u32,
    #[serde(rename = "GP")]
    pub gp: u32,
    #[serde(rename = "GS")]
    pub gs: u32,
    #[serde(rename = "MP")]
    pub mp: f64,
    #[serde(rename = "FGM")]
    pub fgm: f64,
    #[serde(rename = "FGA")]
    pub fga: f64,
    #[serde(rename = "FG%")]
    pub fg_pct: f64,
    #[serde(rename = "FG2M")]
    pub fg2m: f64,
    #[serde(rename = "FG2A")]
    pub fg2a: f64,
    #[serde(rename = "FG2%")]
    pub fg2_pct: f64,
    #[serde(rename = "FGM3")]
    pub fgm3: f64,
    #[serde(rename = "FGA3")]
    pub fga3: f64,
    #[serde(rename = "3P%")]
    pub tp_pct: f64,
    #[serde(rename = "FTM")]
    pub ftm: f64,
    #[serde(rename = "FTA")]
    pub fta: f64,
    #[serde(rename = "FT%")]
    pub ft_pct: f64,
    #[serde(rename = "OREB")]
    pub oreb: f64,
    #[serde(rename = "DREB")]
    pub dreb: f64,
    #[serde(rename = "REB")]
    pub reb: f64,
    #[serde(rename = "AST")]
    pub ast: f64,
    #[serde(rename = "STL")]
    pub stl: f64,
    #[serde(rename = "BLK")]
    pub blk: f64,
    #[serde(rename = "TOV")]
    pub tov: f64,
    #[serde(rename = "PF")]
    pub pf: f64,
    #[serde(rename = "PTS")]
    pub pts: f64,
}

/// Free-text scouting evaluation attributed to a named scout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub report_id: String,
    pub player_id: u32,
    pub report: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Everything the dataset knows about one player, joined by id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfile<'a> {
    pub bio: &'a PlayerBio,
    pub rankings: Option<&'a ScoutRanking>,
    pub measurements: Option<&'a PlayerMeasurements>,
    pub game_logs: Vec<&'a GameLog>,
    pub season_logs: Vec<&'a SeasonLog>,
    pub scouting_reports: Vec<&'a ScoutingReport>,
}
