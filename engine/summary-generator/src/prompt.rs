//! Prompt templates for the scouting-summary and stat-analysis scripts
//!
//! Prompts carry pre-computed numbers so the model writes narrative
//! instead of doing arithmetic.

use chrono::NaiveDate;
use prospect_registry::stats::age_on;
use prospect_registry::{GameLog, PlayerBio};

use crate::averages::PerGameAverages;

/// Render a height in inches as feet'inches" (78 -> 6'6")
pub fn format_height(inches: f64) -> String {
    let total = inches.round() as u32;
    format!("{}'{}\"", total / 12, total % 12)
}

fn format_recent_games(logs: &[&GameLog]) -> String {
    if logs.is_empty() {
        return "No stats available.".to_string();
    }

    // Last five games of the span.
    let recent = &logs[logs.len().saturating_sub(5)..];
    recent
        .iter()
        .map(|game| format!("- {}: {} pts, {} reb, {} ast", game.date, game.pts, game.reb, game.ast))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the free-text scouting-summary prompt for one player
pub fn summary_prompt(player: &PlayerBio, logs: &[&GameLog], today: NaiveDate) -> String {
    let age = age_on(&player.birth_date, today)
        .map(|a| a.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut prompt = String::with_capacity(1024);

    prompt.push_str(&format!(
        "You are a professional NBA scout writing a concise summary of {}, a {}, {} lb player from {} ({}).\n\n",
        player.name,
        format_height(player.height),
        player.weight,
        player.current_team,
        player.league,
    ));

    prompt.push_str("### Background\n");
    prompt.push_str(&format!("- Hometown: {}, {}\n", player.home_town, player.home_country));
    prompt.push_str(&format!("- Nationality: {}\n", player.nationality));
    prompt.push_str(&format!("- Age: {age} years old\n\n"));

    prompt.push_str("### Game Log Summary\n");
    prompt.push_str(&format_recent_games(logs));
    prompt.push_str("\n\n");

    prompt.push_str(
        "### Instructions\n\
         Write a 2-3 sentence scouting summary in a professional, readable tone.\n\
         Do not restate the stats directly. Instead, use them to form insight:\n\
         - What is this player's style?\n\
         - Where do they thrive or struggle?\n\
         - What role might they play in the NBA?\n\n\
         Avoid technical jargon or basketball abbreviations. Write clearly so both fans and general readers can follow.",
    );

    prompt
}

/// Build the JSON-only stat-analysis prompt for one player
///
/// The template pins the exact output shape; the model fills in the
/// explanations only.
pub fn analysis_prompt(avg: &PerGameAverages) -> String {
    let stats_list = format!(
        "points: {:.1}, rebounds: {:.1}, assists: {:.1}, steals: {:.1}, blocks: {:.1}, \
         turnovers: {:.1}, fieldGoalPercentage: {:.1}, threePointPercentage: {:.1}, \
         freeThrowPercentage: {:.1}",
        avg.points,
        avg.rebounds,
        avg.assists,
        avg.steals,
        avg.blocks,
        avg.turnovers,
        avg.field_goal_pct,
        avg.three_point_pct,
        avg.free_throw_pct,
    );

    format!(
        r#"You are a JSON-only response bot. Respond with ONLY a valid JSON object, no other text.
The response MUST follow this exact structure with these exact keys:

{{
  "playerName": "{name}",
  "position": "{position}",
  "analysis": {{
    "stat1": {{
      "stat": "Points Per Game",
      "value": "{points:.1}",
      "explanation": "Explain why points per game is important for a {position}"
    }},
    "stat2": {{
      "stat": "Rebounds Per Game",
      "value": "{rebounds:.1}",
      "explanation": "Explain why rebounds per game is important for a {position}"
    }},
    "stat3": {{
      "stat": "Field Goal Percentage",
      "value": "{fg_pct:.1}",
      "explanation": "Explain why field goal percentage is important for a {position}"
    }}
  }}
}}

Available stats: {stats_list}

Remember:
1. Use ONLY the provided player name and position
2. Use ONLY the provided stat values
3. Include ALL three stats in the analysis
4. Write specific explanations, not placeholders"#,
        name = avg.name,
        position = avg.position,
        points = avg.points,
        rebounds = avg.rebounds,
        fg_pct = avg.field_goal_pct,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages() -> PerGameAverages {
        PerGameAverages {
            player_id: 1,
            name: "Ace Guard".to_string(),
            position: "Guard".to_string(),
            games: 10,
            points: 21.4,
            rebounds: 6.2,
            assists: 4.8,
            steals: 1.3,
            blocks: 0.6,
            turnovers: 2.5,
            field_goal_pct: 47.3,
            three_point_pct: 36.8,
            free_throw_pct: 81.0,
        }
    }

    #[test]
    fn test_format_height() {
        assert_eq!(format_height(78.0), "6'6\"");
        assert_eq!(format_height(72.0), "6'0\"");
        assert_eq!(format_height(76.5), "6'5\"");
    }

    #[test]
    fn test_analysis_prompt_shape() {
        let prompt = analysis_prompt(&averages());
        assert!(prompt.contains("\"playerName\": \"Ace Guard\""));
        assert!(prompt.contains("\"position\": \"Guard\""));
        assert!(prompt.contains("\"value\": \"21.4\""));
        assert!(prompt.contains("\"value\": \"47.3\""));
        assert!(prompt.contains("stat3"));
    }

    #[test]
    fn test_summary_prompt_no_logs() {
        let bio_json = r#"{
            "name": "Ace Guard", "playerId": 1, "firstName": "Ace",
            "lastName": "Guard", "birthDate": "2006-03-14", "height": 78,
            "weight": 205, "highSchool": null, "highSchoolState": null,
            "homeTown": "Dallas", "homeState": "TX", "homeCountry": "USA",
            "nationality": "USA", "photoUrl": null, "currentTeam": "Duke",
            "league": "NCAA", "leagueType": "NCAA"
        }"#;
        let bio: PlayerBio = serde_json::from_str(bio_json).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let prompt = summary_prompt(&bio, &[], today);
        assert!(prompt.contains("Ace Guard"));
        assert!(prompt.contains("6'6\""));
        assert!(prompt.contains("Age: 19 years old"));
        assert!(prompt.contains("No stats available."));
    }
}
