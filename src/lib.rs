//! Pet registry library - exposes the modules for the binary and the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState, Config, ServiceError};

use axum::{Router, routing::get};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    use handlers::root;

    Router::new()
        .route("/", get(root))
        .nest("/api/pets", configure_pet_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Routes of the pet registry
fn configure_pet_routes() -> Router<Arc<AppState>> {
    use handlers::*;

    Router::new()
        .route("/", get(get_all_pets).post(create_pet))
        .route(
            "/{id}",
            get(get_pet_by_id).put(update_pet).delete(delete_pet),
        )
        .route("/type/{type}", get(get_pets_by_type))
        .route("/owner/{owner_name}", get(get_pets_by_owner_name))
        .route("/breed/{breed}", get(get_pets_by_breed))
        .route("/born-after", get(get_pets_born_after))
        .route("/search", get(get_pets_by_type_and_breed))
        .route("/search/name", get(search_pets_by_name))
}

/// Opens the connection pool and applies the migrations in `migrations/`
pub async fn connect_database(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
