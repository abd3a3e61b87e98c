//! One-time aggregate statistics over the loaded dataset

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::warn;

use crate::types::PlayerBio;

/// Summary statistics precomputed once when the registry is built
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub total_players: usize,
    pub total_rankings: usize,
    /// Count of bios with a non-null photo URL
    pub players_with_photos: usize,
    pub players_by_league: HashMap<String, usize>,
    pub players_by_nationality: HashMap<String, usize>,
    /// Mean height in inches over all bios, 0.0 for an empty dataset
    pub average_height: f64,
    /// Mean weight in pounds over all bios, 0.0 for an empty dataset
    pub average_weight: f64,
    /// Histogram of current ages, keyed by age in years
    pub age_distribution: BTreeMap<u32, usize>,
}

impl DatasetStats {
    pub(crate) fn compute(bios: &[PlayerBio], total_rankings: usize, today: NaiveDate) -> Self {
        let mut players_by_league: HashMap<String, usize> = HashMap::new();
        let mut players_by_nationality: HashMap<String, usize> = HashMap::new();
        let mut age_distribution: BTreeMap<u32, usize> = BTreeMap::new();
        let mut players_with_photos = 0;
        let mut total_height = 0.0;
        let mut total_weight = 0.0;

        for bio in bios {
            *players_by_league.entry(bio.league.clone()).or_insert(0) += 1;
            *players_by_nationality.entry(bio.nationality.clone()).or_insert(0) += 1;

            if bio.photo_url.is_some() {
                players_with_photos += 1;
            }

            total_height += bio.height;
            total_weight += bio.weight;

            match age_on(&bio.birth_date, today) {
                Some(age) => *age_distribution.entry(age).or_insert(0) += 1,
                None => warn!("Unparseable birth date {:?} for {}", bio.birth_date, bio.name),
            }
        }

        let count = bios.len();
        let (average_height, average_weight) = if count == 0 {
            (0.0, 0.0)
        } else {
            (total_height / count as f64, total_weight / count as f64)
        };

        Self {
            total_players: count,
            total_rankings,
            players_with_photos,
            players_by_league,
            players_by_nationality,
            average_height,
            average_weight,
            age_distribution,
        }
    }
}

/// Age in whole years on `today` for a `YYYY-MM-DD` birth date
///
/// The year difference is decremented only when today's (month, day) is
/// strictly earlier than the birth (month, day): a birthday falling on
/// `today` already counts. Returns `None` for unparseable dates.
pub fn age_on(birth_date: &str, today: NaiveDate) -> Option<u32> {
    // Some feeds append a time component; the date part is all we need.
    let date_part = birth_date.split('T').next().unwrap_or(birth_date);
    let birth = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}
