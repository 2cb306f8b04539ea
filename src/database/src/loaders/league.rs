use crate::DatabaseError;
use flate2::read::GzDecoder;
use include_dir::{Dir, include_dir};
use league_core::{Calendar, Category, Match, StandingsEntry, Team};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

static SEED_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data");

/// Raw league documents as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseEntity {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub calendars: Vec<Calendar>,
    #[serde(default)]
    pub standings: Vec<StandingsEntry>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Seed data compiled into the binary, one JSON file per collection.
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        Ok(DatabaseEntity {
            categories: Self::embedded("categories.json")?,
            teams: Self::embedded("teams.json")?,
            matches: Self::embedded("matches.json")?,
            calendars: Self::embedded("calendars.json")?,
            standings: Vec::new(),
        })
    }

    /// A single JSON document, gzip-compressed when the name ends in `.gz`.
    pub fn load_from(path: &Path) -> Result<DatabaseEntity, DatabaseError> {
        debug!("loading league data from {}", path.display());

        let reader = BufReader::new(File::open(path)?);

        let entity = if Self::is_compressed(path) {
            let mut json = String::new();
            GzDecoder::new(reader).read_to_string(&mut json)?;
            serde_json::from_str(&json)?
        } else {
            serde_json::from_reader(reader)?
        };

        Ok(entity)
    }

    pub fn is_compressed(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "gz")
    }

    fn embedded<T: DeserializeOwned>(name: &str) -> Result<Vec<T>, DatabaseError> {
        let file = SEED_DIR
            .get_file(name)
            .ok_or_else(|| DatabaseError::MissingSeed(name.to_string()))?;

        Ok(serde_json::from_slice(file.contents())?)
    }
}
