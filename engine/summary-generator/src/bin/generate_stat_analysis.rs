use std::fs;
use std::time::Duration;

use anyhow::{bail, Result};
use prospect_registry::{DraftDataset, ProspectRegistry};
use summary_generator::{
    extract_json, per_game_averages, prompt, GeneratorConfig, OllamaClient, PlayerAnalysis,
};
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

    let players = per_game_averages(&registry);
    info!("Generating stat analyses for {} players with game logs", players.len());

    let mut analyses: Vec<PlayerAnalysis> = Vec::new();

    for (index, player) in players.iter().enumerate() {
        info!("[{}/{}] {} ({})", index + 1, players.len(), player.name, player.position);

        let prompt = prompt::analysis_prompt(player);
        let output = match client.generate(&prompt).await {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to generate analysis for {}: {e:#}", player.name);
                continue;
            }
        };

        let Some(json) = extract_json(&output) else {
            warn!("No valid JSON in model output for {}", player.name);
            continue;
        };

        match serde_json::from_str::<PlayerAnalysis>(json) {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => warn!("Malformed analysis for {}: {e}", player.name),
        }

        tokio::time::sleep(Duration::from_millis(config.pause_ms)).await;
    }

    if analyses.is_empty() {
        bail!("no analyses were generated");
    }

    fs::create_dir_all(&config.output_dir)?;
    let output_path = config.output_dir.join("player_stat_analysis.json");
    fs::write(&output_path, serde_json::to_string_pretty(&analyses)?)?;

    info!(
        "Wrote {} of {} analyses to {}",
        analyses.len(),
        players.len(),
        output_path.display()
    );
    Ok(())
}
