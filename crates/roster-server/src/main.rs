use axum::Json;
use serde::Serialize;
use std::sync::Arc;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod server;

use adapters::InMemoryRecordRepository;
use application::RecordService;
use config::ServerConfig;
use roster::{Item, User};

/// Type aliases for application services with concrete repository implementations
pub type AppItemService = RecordService<Item, InMemoryRecordRepository<Item>>;
pub type AppUserService = RecordService<User, InMemoryRecordRepository<User>>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<AppItemService>,
    pub user_service: Arc<AppUserService>,
}

impl AppState {
    /// Fresh repositories holding the seed records
    pub fn seeded() -> Self {
        let item_repo = Arc::new(InMemoryRecordRepository::new(Item::seed_data()));
        let user_repo = Arc::new(InMemoryRecordRepository::new(User::seed_data()));

        Self {
            item_service: Arc::new(RecordService::new(item_repo)),
            user_service: Arc::new(RecordService::new(user_repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Roster API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Roster API initializing...");

    let config = ServerConfig::from_env()?;
    let state = AppState::seeded();

    tracing::info!("Item and User repositories seeded");

    server::serve(&config, state).await
}
