use crate::{DatabaseEntity, DatabaseError, LeagueDatabase};
use league_core::LegacyForfeit;
use log::{info, warn};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    /// Turn 20-0 scores on imported matches into explicit forfeits.
    pub legacy_forfeits: bool,
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds the live store from loaded documents.
    pub fn generate(mut data: DatabaseEntity, options: GeneratorOptions) -> Result<LeagueDatabase, DatabaseError> {
        Self::check_unique("category", data.categories.iter().map(|c| c.name.clone()))?;
        Self::check_unique("team id", data.teams.iter().map(|t| t.id.to_string()))?;
        Self::check_unique("match id", data.matches.iter().map(|m| m.id.to_string()))?;
        Self::check_unique("calendar", data.calendars.iter().map(|c| c.category.clone()))?;
        Self::check_unique(
            "team name",
            data.teams
                .iter()
                .map(|t| format!("{}/{}/{:?}", t.category, league_core::normalize_name(&t.name), t.pool)),
        )?;

        for team in &data.teams {
            if !data.categories.iter().any(|c| c.name == team.category) {
                warn!("team {} ({}) references unknown category {}", team.id, team.name, team.category);
            }
        }

        if options.legacy_forfeits {
            let normalized = data
                .matches
                .iter_mut()
                .map(LegacyForfeit::normalize)
                .filter(|changed| *changed)
                .count();

            info!("legacy forfeits normalized: {}", normalized);
        }

        Ok(LeagueDatabase::new(data))
    }

    fn check_unique(what: &str, keys: impl Iterator<Item = String>) -> Result<(), DatabaseError> {
        let mut seen = HashSet::new();

        for key in keys {
            if !seen.insert(key.clone()) {
                return Err(DatabaseError::Duplicate(format!("{} {}", what, key)));
            }
        }

        Ok(())
    }
}
