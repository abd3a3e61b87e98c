use prospect_registry::ProspectRegistry;

/// Per-game averages accumulated over a player's game logs
///
/// Shooting percentages are made/attempted over the whole span, not an
/// average of per-game percentages.
#[derive(Debug, Clone)]
pub struct PerGameAverages {
    pub player_id: u32,
    pub name: String,
    pub position: String,
    pub games: usize,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub field_goal_pct: f64,
    pub three_point_pct: f64,
    pub free_throw_pct: f64,
}

fn pct(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        f64::from(made) / f64::from(attempted) * 100.0
    }
}

/// Per-game averages for every player with at least one game log,
/// in bio source order
pub fn per_game_averages(registry: &ProspectRegistry) -> Vec<PerGameAverages> {
    registry
        .all_players()
        .iter()
        .filter_map(|bio| {
            let logs = registry.game_logs_for(bio.player_id);
            if logs.is_empty() {
                return None;
            }

            let games = logs.len() as f64;
            let mut fgm = 0u32;
            let mut fga = 0u32;
            let mut tpm = 0u32;
            let mut tpa = 0u32;
            let mut ftm = 0u32;
            let mut fta = 0u32;
            let mut pts = 0u32;
            let mut reb = 0u32;
            let mut ast = 0u32;
            let mut stl = 0u32;
            let mut blk = 0u32;
            let mut tov = 0u32;

            for log in &logs {
                fgm += log.fgm;
                fga += log.fga;
                tpm += log.tpm;
                tpa += log.tpa;
                ftm += log.ftm;
                fta += log.fta;
                pts += log.pts;
                reb += log.reb;
                ast += log.ast;
                stl += log.stl;
                blk += log.blk;
                tov += log.tov;
            }

            Some(PerGameAverages {
                player_id: bio.player_id,
                name: bio.name.clone(),
                position: bio.position.clone().unwrap_or_else(|| "Unknown".to_string()),
                games: logs.len(),
                points: f64::from(pts) / games,
                rebounds: f64::from(reb) / games,
                assists: f64::from(ast) / games,
                steals: f64::from(stl) / games,
                blocks: f64::from(blk) / games,
                turnovers: f64::from(tov) / games,
                field_goal_pct: pct(fgm, fga),
                three_point_pct: pct(tpm, tpa),
                free_throw_pct: pct(ftm, fta),
            })
        })
        .collect()
}
