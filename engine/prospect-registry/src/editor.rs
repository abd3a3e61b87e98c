//! In-memory editing of the draft class for the admin console
//!
//! Mutations here touch a working copy only. The registry and the source
//! file are never written back; dropping the editor discards everything.

use tracing::info;

use crate::registry::ProspectRegistry;
use crate::types::PlayerBio;

/// A mutable working copy of the bio list
pub struct DraftClassEditor {
    players: Vec<PlayerBio>,
    baseline: Vec<PlayerBio>,
}

impl DraftClassEditor {
    /// Start an editing session from the registry's current bio list
    pub fn new(registry: &ProspectRegistry) -> Self {
        let players = registry.all_players().to_vec();
        Self { baseline: players.clone(), players }
    }

    /// The working copy in its current order
    pub fn players(&self) -> &[PlayerBio] {
        &self.players
    }

    /// Add a player to the working copy, returning the id used
    ///
    /// Pass `player_id` 0 to have the next id above the current maximum
    /// assigned; a caller-chosen non-zero id is kept as given.
    pub fn add_player(&mut self, mut bio: PlayerBio) -> u32 {
        if bio.player_id == 0 {
            let max_id = self.players.iter().map(|p| p.player_id).max().unwrap_or(0);
            bio.player_id = max_id + 1;
        }

        info!("Added {} (id {}) to the working draft class", bio.name, bio.player_id);
        let id = bio.player_id;
        self.players.push(bio);
        id
    }

    /// Remove a player from the working copy; false when the id is absent
    pub fn remove_player(&mut self, player_id: u32) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.player_id != player_id);
        self.players.len() < before
    }

    /// Discard all edits and restore the loaded bio list
    pub fn reset(&mut self) {
        self.players = self.baseline.clone();
    }
}
