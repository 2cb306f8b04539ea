mod calendars;
mod categories;
mod config;
mod error;
mod matches;
mod routes;
mod standings;
mod teams;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::Router;
use axum::response::IntoResponse;
use database::{DatabaseSnapshot, LeagueDatabase};
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueServer {
    data: LeagueAppData,
}

impl LeagueServer {
    pub fn new(data: LeagueAppData) -> Self {
        LeagueServer { data }
    }

    pub fn router(&self) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("handler panicked".to_string()).into_response()
                    })),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self) {
        let addr = self.data.config.addr();

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                return;
            }
        };

        info!("listen at: http://{}", addr);

        if let Err(e) = axum::serve(listener, self.router()).await {
            error!("Server error: {}", e);
        }
    }
}

pub struct LeagueAppData {
    pub database: Arc<RwLock<LeagueDatabase>>,
    pub config: Arc<ServerConfig>,
}

impl LeagueAppData {
    pub fn new(database: LeagueDatabase, config: ServerConfig) -> Self {
        LeagueAppData {
            database: Arc::new(RwLock::new(database)),
            config: Arc::new(config),
        }
    }

    /// Runs `action` under the store write lock on the blocking pool.
    /// The lock spans the whole action, recalculations included, and the
    /// snapshot is written before it is released.
    pub async fn write<T, F>(&self, action: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut LeagueDatabase) -> ApiResult<T> + Send + 'static,
    {
        let mut guard = Arc::clone(&self.database).write_owned().await;
        let snapshot_path = self.config.snapshot_path.clone();

        tokio::task::spawn_blocking(move || {
            let result = action(&mut *guard)?;

            if let Some(path) = snapshot_path {
                if let Err(e) = DatabaseSnapshot::save(&*guard, &path) {
                    error!("snapshot not saved to {}: {}", path.display(), e);
                }
            }

            Ok(result)
        })
        .await
        .map_err(|e| ApiError::InternalError(format!("store task failed: {}", e)))?
    }
}

impl Clone for LeagueAppData {
    fn clone(&self) -> Self {
        LeagueAppData {
            database: Arc::clone(&self.database),
            config: Arc::clone(&self.config),
        }
    }
}
