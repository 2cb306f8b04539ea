use crate::{DatabaseError, DatabaseLoader, LeagueDatabase};
use flate2::Compression;
use flate2::write::GzEncoder;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct DatabaseSnapshot;

impl DatabaseSnapshot {
    /// Writes the whole store as one JSON document, readable by
    /// [`DatabaseLoader::load_from`].
    pub fn save(database: &LeagueDatabase, path: &Path) -> Result<(), DatabaseError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(path)?);
        let entity = database.to_entity();

        if DatabaseLoader::is_compressed(path) {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            serde_json::to_writer(&mut encoder, &entity)?;
            encoder.finish()?.flush()?;
        } else {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, &entity)?;
            writer.flush()?;
        }

        debug!("snapshot saved to {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatabaseGenerator, GeneratorOptions};
    use league_core::{LeagueSource, StandingsEngine};

    #[test]
    fn test_snapshot_reloads_with_standings() {
        let entity = DatabaseLoader::load().unwrap();
        let mut db = DatabaseGenerator::generate(entity, GeneratorOptions::default()).unwrap();
        StandingsEngine::recalculate(&mut db, "L1 MESSIEUR", None).unwrap();

        let dir = std::env::temp_dir().join(format!("league-snapshot-{}", std::process::id()));

        for name in ["league.json", "league.json.gz"] {
            let path = dir.join(name);
            DatabaseSnapshot::save(&db, &path).unwrap();

            let reloaded = DatabaseLoader::load_from(&path).unwrap();
            assert_eq!(reloaded, db.to_entity());
            assert_eq!(
                LeagueDatabase::new(reloaded).standings("L1 MESSIEUR", None),
                db.standings("L1 MESSIEUR", None)
            );
        }

        let _ = std::fs::remove_dir_all(dir);
    }
}
