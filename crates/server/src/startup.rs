use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::{AppConfig, StorageBackend};
use service::pokemon::repo::{memory::MemoryPokemonRepository, seaorm::SeaOrmPokemonRepository};
use service::pokemon::PokemonRepository;

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Construct the configured store and wrap it in handler state. The postgres
/// backend connects with the configured pool and applies pending migrations.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let repo: Arc<dyn PokemonRepository> = match cfg.database.backend {
        StorageBackend::Memory => {
            warn!("using in-memory pokemon store; records are lost on restart");
            Arc::new(MemoryPokemonRepository::new())
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!("database connected and migrated");
            Arc::new(SeaOrmPokemonRepository::new(db))
        }
    };
    Ok(ServerState::new(repo))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.database.backend, "starting pokedex server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 9090;
        assert_eq!(bind_addr(&cfg).unwrap(), "0.0.0.0:9090".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn memory_backend_state_builds_without_database() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.database.backend = StorageBackend::Memory;
        let state = build_state(&cfg).await?;
        assert!(state.pokemon.list().await?.is_empty());
        Ok(())
    }
}
