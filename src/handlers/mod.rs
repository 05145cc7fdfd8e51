//! Handlers module - HTTP endpoints
//!
//! Handlers extract the request, call the matching service and map the outcome
//! to a status code.

pub mod pet;

pub use pet::{
    create_pet, delete_pet, get_all_pets, get_pet_by_id, get_pets_born_after, get_pets_by_breed,
    get_pets_by_owner_name, get_pets_by_type, get_pets_by_type_and_breed, search_pets_by_name,
    update_pet,
};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
