//! Derived box-score views: season averages, recent games, stat leaders

use serde::Serialize;

use crate::registry::ProspectRegistry;
use crate::types::SeasonLog;

/// Season totals condensed from a player's latest season log
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTotals {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub fg_percentage: f64,
    pub tp_percentage: f64,
    pub ft_percentage: f64,
}

/// Per-game values derived from season totals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerGameStats {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub minutes: f64,
}

/// A player's latest-season statistical summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonAverages {
    pub games_played: u32,
    pub totals: SeasonTotals,
    pub per_game: PerGameStats,
}

/// A single recent game condensed for display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentGame {
    pub date: String,
    pub opponent: String,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    /// 'W' or 'L' from the player's side of the scoreline
    pub result: char,
    pub score: String,
}

/// Season-log column a leaderboard is ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    FieldGoalPercentage,
}

impl StatCategory {
    fn value(self, log: &SeasonLog) -> f64 {
        match self {
            StatCategory::Points => log.pts,
            StatCategory::Rebounds => log.reb,
            StatCategory::Assists => log.ast,
            StatCategory::Steals => log.stl,
            StatCategory::Blocks => log.blk,
            StatCategory::FieldGoalPercentage => log.fg_pct,
        }
    }
}

/// One leaderboard entry: a season log joined back to its bio
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLeader {
    pub player_id: u32,
    pub player_name: String,
    pub position: Option<String>,
    pub photo_url: Option<String>,
    pub value: f64,
}

fn per_game(total: f64, gp: u32) -> f64 {
    if gp == 0 {
        0.0
    } else {
        total / f64::from(gp)
    }
}

impl ProspectRegistry {
    /// Totals and per-game averages from the player's most recent season
    /// log (first in source order); absent when the player has none
    pub fn season_averages(&self, player_id: u32) -> Option<SeasonAverages> {
        let latest = *self.season_logs_for(player_id).first()?;
        let gp = latest.gp;

        Some(SeasonAverages {
            games_played: gp,
            totals: SeasonTotals {
                points: latest.pts,
                rebounds: latest.reb,
                assists: latest.ast,
                steals: latest.stl,
                blocks: latest.blk,
                turnovers: latest.tov,
                fg_percentage: latest.fg_pct,
                tp_percentage: latest.tp_pct,
                ft_percentage: latest.ft_pct,
            },
            per_game: PerGameStats {
                points: per_game(latest.pts, gp),
                rebounds: per_game(latest.reb, gp),
                assists: per_game(latest.ast, gp),
                steals: per_game(latest.stl, gp),
                blocks: per_game(latest.blk, gp),
                turnovers: per_game(latest.tov, gp),
                minutes: per_game(latest.mp, gp),
            },
        })
    }

    /// The first `limit` game logs for a player, condensed for display
    ///
    /// Win/loss is judged from the side the player was on; when the home
    /// flag is missing the home-team comparison is used as-is.
    pub fn recent_games(&self, player_id: u32, limit: usize) -> Vec<RecentGame> {
        self.game_logs_for(player_id)
            .into_iter()
            .take(limit)
            .map(|log| {
                let home_won = log.home_team_pts > log.visitor_team_pts;
                let won = match log.is_home {
                    Some(0) => !home_won,
                    _ => home_won,
                };

                RecentGame {
                    date: log.date.clone(),
                    opponent: log.opponent.clone(),
                    points: log.pts,
                    rebounds: log.reb,
                    assists: log.ast,
                    result: if won { 'W' } else { 'L' },
                    score: format!("{}-{}", log.home_team_pts, log.visitor_team_pts),
                }
            })
            .collect()
    }

    /// Top `limit` season-log entries by the given stat, best first
    ///
    /// Season logs that do not join to a bio are skipped.
    pub fn stat_leaders(&self, category: StatCategory, limit: usize) -> Vec<StatLeader> {
        let mut leaders: Vec<StatLeader> = self
            .all_season_logs()
            .iter()
            .filter_map(|log| {
                let bio = self.player_by_id(log.player_id)?;
                Some(StatLeader {
                    player_id: bio.player_id,
                    player_name: bio.name.clone(),
                    position: bio.position.clone(),
                    photo_url: bio.photo_url.clone(),
                    value: category.value(log),
                })
            })
            .collect();

        leaders.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap());
        leaders.truncate(limit);
        leaders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DraftDataset;
    use crate::registry::tests::{bio, game_log, season_log, test_dataset};
    use chrono::NaiveDate;

    fn registry() -> ProspectRegistry {
        ProspectRegistry::with_today(test_dataset(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_season_averages() {
        let registry = registry();

        // Fixture: 540 points over 28 games, 200 rebounds, 90 assists.
        let averages = registry.season_averages(1).unwrap();
        assert_eq!(averages.games_played, 28);
        assert_eq!(averages.totals.points, 540.0);
        assert!((averages.per_game.points - 540.0 / 28.0).abs() < 1e-9);
        assert!((averages.per_game.rebounds - 200.0 / 28.0).abs() < 1e-9);
        assert_eq!(averages.totals.fg_percentage, 46.9);

        assert!(registry.season_averages(2).is_none());
    }

    #[test]
    fn test_season_averages_zero_games() {
        let dataset = DraftDataset {
            bios: vec![bio(1, "A", "T", "X", "USA")],
            season_logs: vec![season_log(1, 2025, 0, 0.0)],
            ..Default::default()
        };
        let registry =
            ProspectRegistry::with_today(dataset, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let averages = registry.season_averages(1).unwrap();
        assert_eq!(averages.per_game.points, 0.0);
        assert_eq!(averages.per_game.minutes, 0.0);
    }

    #[test]
    fn test_recent_games_result_respects_home_flag() {
        let mut dataset = test_dataset();
        // Away game the visitors won: the player's side wins.
        let mut away_win = game_log(1, 103);
        away_win.is_home = Some(0);
        away_win.home_team_pts = 70;
        away_win.visitor_team_pts = 90;
        dataset.game_logs.push(away_win);

        let registry =
            ProspectRegistry::with_today(dataset, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let games = registry.recent_games(1, 10);
        assert_eq!(games.len(), 3);
        // Fixture logs are home wins (82-75).
        assert_eq!(games[0].result, 'W');
        assert_eq!(games[0].score, "82-75");
        // The appended away game was won by the visiting side.
        assert_eq!(games[2].result, 'W');
        assert_eq!(games[2].score, "70-90");
    }

    #[test]
    fn test_recent_games_limit() {
        let registry = registry();
        assert_eq!(registry.recent_games(1, 1).len(), 1);
        assert!(registry.recent_games(2, 5).is_empty());
    }

    #[test]
    fn test_stat_leaders_ordering() {
        let registry = registry();

        // Player 1 scored 540, player 3 scored 390; player 2 has no log.
        let leaders = registry.stat_leaders(StatCategory::Points, 5);
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].player_id, 1);
        assert_eq!(leaders[0].value, 540.0);
        assert_eq!(leaders[1].player_id, 3);

        let top_one = registry.stat_leaders(StatCategory::Points, 1);
        assert_eq!(top_one.len(), 1);
    }

    #[test]
    fn test_stat_leaders_skip_orphan_logs() {
        let mut dataset = test_dataset();
        dataset.season_logs.push(season_log(999, 2025, 30, 900.0));
        let registry =
            ProspectRegistry::with_today(dataset, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let leaders = registry.stat_leaders(StatCategory::Points, 5);
        assert!(leaders.iter().all(|l| l.player_id != 999));
    }
}
