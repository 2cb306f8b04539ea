use database::{DatabaseEntity, DatabaseError, DatabaseGenerator, DatabaseLoader, GeneratorOptions};
use env_logger::Env;
use league_core::{StandingsEngine, TimeEstimation};
use log::{info, warn};
use web::{LeagueAppData, LeagueServer, ServerConfig};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    let (entity, estimated) = TimeEstimation::estimate(|| load(&config));
    let entity = entity?;

    info!(
        "database loaded: {} categories, {} teams, {} matches, {} ms",
        entity.categories.len(),
        entity.teams.len(),
        entity.matches.len(),
        estimated
    );

    let options = GeneratorOptions {
        legacy_forfeits: config.legacy_forfeits,
    };

    let mut database = DatabaseGenerator::generate(entity, options)?;

    let (results, estimated) = TimeEstimation::estimate(|| StandingsEngine::recalculate_all(&mut database));
    let failed = results.iter().filter(|(_, result)| result.is_err()).count();

    if failed > 0 {
        warn!("standings not built for {} of {} categories", failed, results.len());
    }

    info!("🏀 standings built for {} categories: {} ms", results.len() - failed, estimated);

    LeagueServer::new(LeagueAppData::new(database, config)).run().await;

    Ok(())
}

fn load(config: &ServerConfig) -> Result<DatabaseEntity, DatabaseError> {
    match &config.data_path {
        Some(path) => DatabaseLoader::load_from(path),
        None => DatabaseLoader::load(),
    }
}
