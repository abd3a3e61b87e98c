//! Prospect Registry - query layer over the static draft dataset
//!
//! This crate loads the scouting dataset (one JSON document of bios,
//! scout rankings, combine measurements, game logs, season logs, and
//! scouting reports) once at startup and exposes synchronous read-only
//! queries plus one-time aggregate statistics over it.

pub mod boxscore;
pub mod dataset;
pub mod editor;
pub mod error;
pub mod registry;
pub mod stats;
pub mod types;

pub use boxscore::{RecentGame, SeasonAverages, StatCategory, StatLeader};
pub use dataset::DraftDataset;
pub use editor::DraftClassEditor;
pub use error::{RegistryError, Result};
pub use registry::ProspectRegistry;
pub use stats::DatasetStats;
pub use types::{
    CompleteProfile, GameLog, PlayerBio, PlayerMeasurements, ScoutRanking, ScoutingReport,
    SeasonLog,
};
