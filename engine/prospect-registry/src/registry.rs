use std::collections::HashSet;

use chrono::Utc;
use tracing::info;

use crate::dataset::DraftDataset;
use crate::stats::DatasetStats;
use crate::types::{
    CompleteProfile, GameLog, PlayerBio, PlayerMeasurements, ScoutRanking, ScoutingReport,
    SeasonLog,
};

/// Prospect Registry - read-only query facade over the draft dataset
///
/// Built once at process start from a loaded [`DraftDataset`]; aggregate
/// statistics are computed at construction and every query afterwards is
/// a pure in-memory scan. Lookups that miss return an absent value, not
/// an error.
pub struct ProspectRegistry {
    dataset: DraftDataset,
    stats: DatasetStats,
}

impl ProspectRegistry {
    /// Build the registry and precompute aggregate statistics
    pub fn new(dataset: DraftDataset) -> Self {
        let today = Utc::now().date_naive();
        let stats = DatasetStats::compute(&dataset.bios, dataset.scout_rankings.len(), today);

        info!(
            "Registry built with {} prospects across {} leagues",
            stats.total_players,
            stats.players_by_league.len()
        );

        Self { dataset, stats }
    }

    #[cfg(test)]
    pub(crate) fn with_today(dataset: DraftDataset, today: chrono::NaiveDate) -> Self {
        let stats = DatasetStats::compute(&dataset.bios, dataset.scout_rankings.len(), today);
        Self { dataset, stats }
    }

    /// All prospect bios in source-file order
    pub fn all_players(&self) -> &[PlayerBio] {
        &self.dataset.bios
    }

    /// All scout-ranking records in source-file order
    pub fn all_rankings(&self) -> &[ScoutRanking] {
        &self.dataset.scout_rankings
    }

    /// All measurement records in source-file order
    pub fn all_measurements(&self) -> &[PlayerMeasurements] {
        &self.dataset.measurements
    }

    /// All game logs in source-file order
    pub fn all_game_logs(&self) -> &[GameLog] {
        &self.dataset.game_logs
    }

    /// All season logs in source-file order
    pub fn all_season_logs(&self) -> &[SeasonLog] {
        &self.dataset.season_logs
    }

    /// All scouting reports in source-file order
    pub fn all_scouting_reports(&self) -> &[ScoutingReport] {
        &self.dataset.scouting_reports
    }

    /// Look up a bio by player id
    pub fn player_by_id(&self, player_id: u32) -> Option<&PlayerBio> {
        self.dataset.bios.iter().find(|bio| bio.player_id == player_id)
    }

    /// The scout-ranking record for a player, at most one per id
    pub fn rankings_for(&self, player_id: u32) -> Option<&ScoutRanking> {
        self.dataset.scout_rankings.iter().find(|r| r.player_id == player_id)
    }

    /// Combine measurements for a player, at most one record per id
    pub fn measurements_for(&self, player_id: u32) -> Option<&PlayerMeasurements> {
        self.dataset.measurements.iter().find(|m| m.player_id == player_id)
    }

    /// All game logs for a player in source order
    pub fn game_logs_for(&self, player_id: u32) -> Vec<&GameLog> {
        self.dataset.game_logs.iter().filter(|log| log.player_id == player_id).collect()
    }

    /// All season logs for a player in source order
    pub fn season_logs_for(&self, player_id: u32) -> Vec<&SeasonLog> {
        self.dataset.season_logs.iter().filter(|log| log.player_id == player_id).collect()
    }

    /// All scouting reports for a player in source order
    pub fn scouting_reports_for(&self, player_id: u32) -> Vec<&ScoutingReport> {
        self.dataset.scouting_reports.iter().filter(|r| r.player_id == player_id).collect()
    }

    /// Case-insensitive substring search over name, current team, league,
    /// and nationality; a match on any one field qualifies
    pub fn search_players(&self, query: &str) -> Vec<&PlayerBio> {
        let term = query.to_lowercase();
        self.dataset
            .bios
            .iter()
            .filter(|bio| {
                bio.name.to_lowercase().contains(&term)
                    || bio.current_team.to_lowercase().contains(&term)
                    || bio.league.to_lowercase().contains(&term)
                    || bio.nationality.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Bios whose league matches exactly
    pub fn players_by_league(&self, league: &str) -> Vec<&PlayerBio> {
        self.dataset.bios.iter().filter(|bio| bio.league == league).collect()
    }

    /// Bios whose nationality matches exactly
    pub fn players_by_nationality(&self, nationality: &str) -> Vec<&PlayerBio> {
        self.dataset.bios.iter().filter(|bio| bio.nationality == nationality).collect()
    }

    /// The top `limit` prospects by average scout rank, best first
    ///
    /// Ranking records with no scored scouts sort after every record that
    /// has at least one; ties keep source order (stable sort). Rankings
    /// whose id has no bio are dropped from the result.
    pub fn top_ranked_players(&self, limit: usize) -> Vec<&PlayerBio> {
        let mut rankings: Vec<&ScoutRanking> = self.dataset.scout_rankings.iter().collect();
        rankings.sort_by(|a, b| {
            let a_avg = a.average_rank().unwrap_or(f64::INFINITY);
            let b_avg = b.average_rank().unwrap_or(f64::INFINITY);
            a_avg.partial_cmp(&b_avg).unwrap()
        });

        rankings
            .into_iter()
            .take(limit)
            .filter_map(|ranking| self.player_by_id(ranking.player_id))
            .collect()
    }

    /// Aggregate statistics computed at construction
    pub fn stats(&self) -> &DatasetStats {
        &self.stats
    }

    /// Everything known about one player, absent iff the bio is
    pub fn complete_profile(&self, player_id: u32) -> Option<CompleteProfile<'_>> {
        let bio = self.player_by_id(player_id)?;

        Some(CompleteProfile {
            bio,
            rankings: self.rankings_for(player_id),
            measurements: self.measurements_for(player_id),
            game_logs: self.game_logs_for(player_id),
            season_logs: self.season_logs_for(player_id),
            scouting_reports: self.scouting_reports_for(player_id),
        })
    }

    /// Bios with at least one measurements record
    pub fn players_with_measurements(&self) -> Vec<&PlayerBio> {
        let ids: HashSet<u32> = self.dataset.measurements.iter().map(|m| m.player_id).collect();
        self.dataset.bios.iter().filter(|bio| ids.contains(&bio.player_id)).collect()
    }

    /// Bios with at least one game log
    pub fn players_with_game_logs(&self) -> Vec<&PlayerBio> {
        let ids: HashSet<u32> = self.dataset.game_logs.iter().map(|log| log.player_id).collect();
        self.dataset.bios.iter().filter(|bio| ids.contains(&bio.player_id)).collect()
    }

    /// Bios with at least one scouting report
    pub fn players_with_scouting_reports(&self) -> Vec<&PlayerBio> {
        let ids: HashSet<u32> =
            self.dataset.scouting_reports.iter().map(|r| r.player_id).collect();
        self.dataset.bios.iter().filter(|bio| ids.contains(&bio.player_id)).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub(crate) fn bio(player_id: u32, name: &str, team: &str, league: &str, nat: &str) -> PlayerBio {
        PlayerBio {
            player_id,
            name: name.to_string(),
            first_name: name.split(' ').next().unwrap_or(name).to_string(),
            last_name: name.split(' ').next_back().unwrap_or(name).to_string(),
            birth_date: "2005-08-04".to_string(),
            height: 78.0,
            weight: 210.0,
            high_school: None,
            high_school_state: None,
            home_town: "Springfield".to_string(),
            home_state: None,
            home_country: "USA".to_string(),
            nationality: nat.to_string(),
            photo_url: None,
            current_team: team.to_string(),
            league: league.to_string(),
            league_type: league.to_string(),
            position: None,
        }
    }

    pub(crate) fn ranking(player_id: u32, ranks: [Option<u32>; 5]) -> ScoutRanking {
        ScoutRanking {
            player_id,
            espn: ranks[0],
            sam_vecenie: ranks[1],
            kevin_oconnor: ranks[2],
            kyle_boone: ranks[3],
            gary_parrish: ranks[4],
        }
    }

    pub(crate) fn game_log(player_id: u32, game_id: u32) -> GameLog {
        GameLog {
            player_id,
            game_id,
            season: 2025,
            league: "NCAA".to_string(),
            date: "2025-01-15 19:00:00".to_string(),
            team: "Duke".to_string(),
            team_id: 1,
            opponent_id: 2,
            is_home: Some(1),
            opponent: "UNC".to_string(),
            home_team_pts: 82,
            visitor_team_pts: 75,
            gp: 1,
            gs: 1,
            time_played: "30:00".to_string(),
            fgm: 8,
            fga: 14,
            fg_pct: Some(57.1),
            tpm: 2,
            tpa: 6,
            tp_pct: Some(33.3),
            ftm: 4,
            fta: 5,
            ft_pct: Some(80.0),
            oreb: 1,
            dreb: 7,
            reb: 8,
            ast: 3,
            stl: 1,
            blk: 2,
            tov: 2,
            pf: 3,
            pts: 22,
            plus_minus: 9,
            rn: 1,
        }
    }

    pub(crate) fn season_log(player_id: u32, season: u32, gp: u32, pts: f64) -> SeasonLog {
        SeasonLog {
            player_id,
            age: "19".to_string(),
            season,
            league: "NCAA".to_string(),
            team: "Duke".to_string(),
            w: 20,
            l: 8,
            gp,
            gs: gp,
            mp: 30.5 * f64::from(gp),
            fgm: 150.0,
            fga: 320.0,
            fg_pct: 46.9,
            fg2m: 110.0,
            fg2a: 210.0,
            fg2_pct: 52.4,
            fgm3: 40.0,
            fga3: 110.0,
            tp_pct: 36.4,
            ftm: 90.0,
            fta: 110.0,
            ft_pct: 81.8,
            oreb: 40.0,
            dreb: 160.0,
            reb: 200.0,
            ast: 90.0,
            stl: 30.0,
            blk: 25.0,
            tov: 50.0,
            pf: 60.0,
            pts,
        }
    }

    fn report(player_id: u32, report_id: &str) -> ScoutingReport {
        ScoutingReport {
            scout: Some("Sam Vecenie".to_string()),
            user: None,
            report_id: report_id.to_string(),
            player_id,
            report: "High-motor wing who defends multiple positions.".to_string(),
            date: None,
        }
    }

    fn measurements(player_id: u32) -> PlayerMeasurements {
        PlayerMeasurements {
            player_id,
            height_no_shoes: Some(77.0),
            height_shoes: Some(78.25),
            wingspan: Some(84.0),
            reach: Some(103.0),
            max_vertical: Some(37.5),
            no_step_vertical: None,
            weight: Some(210.0),
            body_fat: None,
            hand_length: Some(9.0),
            hand_width: Some(9.5),
            agility: None,
            sprint: Some(3.2),
            shuttle_left: None,
            shuttle_right: None,
            shuttle_best: None,
        }
    }

    pub(crate) fn test_dataset() -> DraftDataset {
        DraftDataset {
            bios: vec![
                bio(1, "Ace Guard", "Duke", "NCAA", "USA"),
                bio(2, "Bo Wing", "Real Madrid", "EuroLeague", "Spain"),
                bio(3, "Cy Center", "Kentucky", "NCAA", "USA"),
            ],
            scout_rankings: vec![
                ranking(1, [Some(5), None, None, None, None]),
                ranking(2, [None; 5]),
                ranking(3, [Some(1), Some(3), None, Some(2), None]),
            ],
            measurements: vec![measurements(1), measurements(3)],
            game_logs: vec![game_log(1, 100), game_log(1, 101), game_log(3, 102)],
            season_logs: vec![season_log(1, 2025, 28, 540.0), season_log(3, 2025, 30, 390.0)],
            scouting_reports: vec![report(1, "r-1"), report(1, "r-2"), report(2, "r-3")],
        }
    }

    fn registry() -> ProspectRegistry {
        ProspectRegistry::with_today(test_dataset(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_player_by_id_round_trip() {
        let registry = registry();
        for bio in registry.all_players() {
            let found = registry.player_by_id(bio.player_id).unwrap();
            assert_eq!(found.name, bio.name);
        }
        assert!(registry.player_by_id(999).is_none());
    }

    #[test]
    fn test_single_record_lookups() {
        let registry = registry();
        assert!(registry.rankings_for(1).is_some());
        assert!(registry.rankings_for(999).is_none());
        assert!(registry.measurements_for(3).is_some());
        assert!(registry.measurements_for(2).is_none());
    }

    #[test]
    fn test_multi_record_lookups_keep_source_order() {
        let registry = registry();
        let logs = registry.game_logs_for(1);
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].game_id, 100);
        assert_eq!(logs[1].game_id, 101);

        assert!(registry.game_logs_for(2).is_empty());
        assert_eq!(registry.scouting_reports_for(1).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_union() {
        let registry = registry();

        // Name match and league match are unioned, not intersected.
        let ncaa = registry.search_players("ncaa");
        assert_eq!(ncaa.len(), 2);

        let by_team = registry.search_players("real madrid");
        assert_eq!(by_team.len(), 1);
        assert_eq!(by_team[0].name, "Bo Wing");

        // "a" hits Ace Guard by name and Spain by nationality; Cy Center
        // only via NCAA league. Every record matches some field here, so
        // narrow to a query that splits the fixture.
        let guard = registry.search_players("GUARD");
        assert_eq!(guard.len(), 1);
        assert_eq!(guard[0].player_id, 1);

        assert!(registry.search_players("zzz").is_empty());
    }

    #[test]
    fn test_exact_filters() {
        let registry = registry();
        assert_eq!(registry.players_by_league("NCAA").len(), 2);
        assert!(registry.players_by_league("ncaa").is_empty());
        assert!(registry.players_by_league("G-League").is_empty());
        assert_eq!(registry.players_by_nationality("Spain").len(), 1);
    }

    #[test]
    fn test_top_ranked_ordering() {
        let registry = registry();

        // Cy Center averages (1+3+2)/3 = 2.0, Ace Guard 5.0, Bo Wing has
        // no scored scouts and sorts last.
        let top = registry.top_ranked_players(3);
        let names: Vec<&str> = top.iter().map(|bio| bio.name.as_str()).collect();
        assert_eq!(names, vec!["Cy Center", "Ace Guard", "Bo Wing"]);

        let top_two = registry.top_ranked_players(2);
        assert_eq!(top_two.len(), 2);
        assert_eq!(top_two[0].name, "Cy Center");
    }

    #[test]
    fn test_top_ranked_drops_orphan_rankings() {
        let mut dataset = test_dataset();
        dataset.scout_rankings.push(ranking(999, [Some(1), None, None, None, None]));
        let registry =
            ProspectRegistry::with_today(dataset, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let top = registry.top_ranked_players(10);
        assert!(top.iter().all(|bio| bio.player_id != 999));
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn test_unranked_sorts_after_ranked_pair() {
        let dataset = DraftDataset {
            bios: vec![bio(1, "A", "T", "X", "USA"), bio(2, "B", "T", "X", "USA")],
            scout_rankings: vec![
                ranking(1, [Some(5), None, None, None, None]),
                ranking(2, [None; 5]),
            ],
            ..Default::default()
        };
        let registry =
            ProspectRegistry::with_today(dataset, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let top = registry.top_ranked_players(2);
        let names: Vec<&str> = top.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);

        assert_eq!(registry.players_by_league("X").len(), 2);
        assert!(registry.players_by_league("Y").is_empty());
    }

    #[test]
    fn test_stats_block() {
        let registry = registry();
        let stats = registry.stats();

        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.total_rankings, 3);
        assert_eq!(stats.players_with_photos, 0);
        assert_eq!(stats.players_by_league.get("NCAA"), Some(&2));
        assert_eq!(stats.players_by_league.get("EuroLeague"), Some(&1));
        assert_eq!(stats.average_height, 78.0);
        assert_eq!(stats.average_weight, 210.0);

        // Every fixture bio shares a birth date, so one bucket holds all.
        let bucketed: usize = stats.age_distribution.values().sum();
        assert_eq!(bucketed, stats.total_players);
        assert_eq!(stats.age_distribution.get(&19), Some(&3));
    }

    #[test]
    fn test_complete_profile_join() {
        let registry = registry();

        let profile = registry.complete_profile(1).unwrap();
        assert_eq!(profile.bio.name, "Ace Guard");
        assert!(profile.rankings.is_some());
        assert!(profile.measurements.is_some());
        assert_eq!(profile.game_logs.len(), 2);
        assert_eq!(profile.season_logs.len(), 1);
        assert_eq!(profile.scouting_reports.len(), 2);

        assert!(registry.complete_profile(999).is_none());
    }

    #[test]
    fn test_presence_filters() {
        let registry = registry();

        let with_measurements: Vec<u32> =
            registry.players_with_measurements().iter().map(|b| b.player_id).collect();
        assert_eq!(with_measurements, vec![1, 3]);

        let with_logs: Vec<u32> =
            registry.players_with_game_logs().iter().map(|b| b.player_id).collect();
        assert_eq!(with_logs, vec![1, 3]);

        let with_reports: Vec<u32> =
            registry.players_with_scouting_reports().iter().map(|b| b.player_id).collect();
        assert_eq!(with_reports, vec![1, 2]);
    }
}
