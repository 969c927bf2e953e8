use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::storage::LeaderboardStore;

pub struct ServerService {
    config: AppConfig,
}

impl ServerService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let store = LeaderboardStore::open(&self.config.storage.path)
            .context("Failed to initialize leaderboard store")?;

        let state = Arc::new(AppState {
            store,
            config: self.config.clone(),
        });

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let port = self.config.server.port;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Leaderboard API running on http://localhost:{}", port);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
