use axum_test::TestServer;
use chrono::NaiveDate;
use pet_registry::{AppState, dtos::PetDTO};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Builds an AppState for the tests
///
/// # Arguments
/// * `pool` - Connection pool handed over by `#[sqlx::test]`, already migrated
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Builds a TestServer around the application router
#[allow(dead_code)]
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = pet_registry::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A valid pet with only the required fields set
#[allow(dead_code)]
pub fn pet(name: &str, pet_type: &str, birth_date: NaiveDate) -> PetDTO {
    PetDTO {
        name: Some(name.to_string()),
        pet_type: Some(pet_type.to_string()),
        birth_date: Some(birth_date),
        ..Default::default()
    }
}
