//! Application State - Shared state of the application

use crate::repositories::PetRepository;
use crate::services::PetService;
use sqlx::SqlitePool;

/// State shared by every route through `Arc<AppState>`
pub struct AppState {
    /// Business rules and persistence for pets
    pub pets: PetService,
}

impl AppState {
    /// Builds every service on top of the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pets: PetService::new(PetRepository::new(pool)),
        }
    }
}
