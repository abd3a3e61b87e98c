use std::fs;
use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Utc;
use prospect_registry::{DraftDataset, ProspectRegistry};
use summary_generator::{prompt, GeneratorConfig, OllamaClient, PlayerSummary};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = GeneratorConfig::load_or_default("generator.toml");
    let dataset = DraftDataset::load_from_file(&config.dataset_path)?;
    let registry = ProspectRegistry::new(dataset);
    let client = OllamaClient::new(&config.model)
        .with_timeout(Duration::from_secs(config.timeout_secs));

    let bios = registry.all_players();
    info!("Generating scouting summaries for {} players", bios.len());

    let today = Utc::now().date_naive();
    let mut summaries: Vec<PlayerSummary> = Vec::new();

    for (index, player) in bios.iter().enumerate() {
        info!("[{}/{}] {}", index + 1, bios.len(), player.name);

        let logs = registry.game_logs_for(player.player_id);
        let prompt = prompt::summary_prompt(player, &logs, today);

        match client.generate(&prompt).await {
            Ok(summary) if summary.is_empty() => {
                warn!("Empty summary generated for {}", player.name);
            }
            Ok(summary) => {
                summaries.push(PlayerSummary { player_id: player.player_id, summary });
            }
            Err(e) => {
                warn!("Failed to generate summary for {}: {e:#}", player.name);
            }
        }

        tokio::time::sleep(Duration::from_millis(config.pause_ms)).await;
    }

    if summaries.is_empty() {
        bail!("no summaries were generated");
    }

    fs::create_dir_all(&config.output_dir)?;
    let output_path = config.output_dir.join("player_summaries.json");
    fs::write(&output_path, serde_json::to_string_pretty(&summaries)?)?;

    info!(
        "Wrote {} of {} summaries to {}",
        summaries.len(),
        bios.len(),
        output_path.display()
    );
    Ok(())
}
