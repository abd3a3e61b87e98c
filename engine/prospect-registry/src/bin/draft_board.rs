use anyhow::Result;
use prospect_registry::{DraftDataset, ProspectRegistry, StatCategory};
use tracing::{info, Level};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "data/intern_project_data.json".to_string());

    let dataset = DraftDataset::load_from_file(&path)?;
    let registry = ProspectRegistry::new(dataset);

    let stats = registry.stats();
    println!("\nDataset summary:");
    println!("- Total prospects: {}", stats.total_players);
    println!("- With photos: {}", stats.players_with_photos);
    println!("- Average height: {:.1} in", stats.average_height);
    println!("- Average weight: {:.1} lb", stats.average_weight);

    println!("\nProspects by league:");
    for (league, count) in &stats.players_by_league {
        println!("  {league:<20} {count}");
    }

    println!("\nBig Board (top 10 by average scout rank):");
    println!("{:<4} {:<24} {:<20} {:<12} {:<8}", "No.", "Name", "Team", "League", "Avg Rank");
    println!("{}", "-".repeat(70));

    for (i, player) in registry.top_ranked_players(10).iter().enumerate() {
        let avg = registry
            .rankings_for(player.player_id)
            .and_then(|r| r.average_rank())
            .map(|a| format!("{a:.1}"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:<4} {:<24} {:<20} {:<12} {:<8}",
            i + 1,
            player.name,
            player.current_team,
            player.league,
            avg
        );
    }

    println!("\nScoring leaders:");
    for leader in registry.stat_leaders(StatCategory::Points, 5) {
        println!("  {:<24} {:.0} pts", leader.player_name, leader.value);
    }

    info!("Draft board rendered for {} prospects", stats.total_players);
    Ok(())
}
