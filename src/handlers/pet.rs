//! Pet handlers - REST endpoints under /api/pets

use crate::core::{AppError, AppState};
use crate::dtos::{BornAfterQuery, NameSearchQuery, PetDTO, TypeBreedQuery};
use crate::entities::Pet;
use axum::{
    extract::{Json, Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

fn to_dtos(pets: Vec<Pet>) -> Json<Vec<PetDTO>> {
    Json(pets.into_iter().map(PetDTO::from).collect())
}

fn read_body(payload: Result<Json<PetDTO>, JsonRejection>) -> Result<PetDTO, AppError> {
    payload.map(|Json(body)| body).map_err(|e| {
        warn!("Malformed pet payload: {}", e);
        AppError::bad_request("Malformed pet payload").with_details(e.body_text())
    })
}

#[instrument(skip(state, payload))]
pub async fn create_pet(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PetDTO>, JsonRejection>,
) -> Result<(StatusCode, Json<PetDTO>), AppError> {
    debug!("Creating pet");
    let body = read_body(payload)?;
    let pet = state.pets.create_pet(body).await?;
    Ok((StatusCode::CREATED, Json(PetDTO::from(pet))))
}

#[instrument(skip(state))]
pub async fn get_all_pets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PetDTO>>, AppError> {
    let pets = state.pets.get_all_pets().await?;
    Ok(to_dtos(pets))
}

#[instrument(skip(state), fields(pet_id = %pet_id))]
pub async fn get_pet_by_id(
    State(state): State<Arc<AppState>>,
    Path(pet_id): Path<i64>, // /api/pets/{id}
) -> Result<Json<PetDTO>, AppError> {
    debug!("Fetching pet by ID");
    match state.pets.get_pet_by_id(pet_id).await? {
        Some(pet) => {
            info!("Pet found");
            Ok(Json(PetDTO::from(pet)))
        }
        None => {
            warn!("Pet not found");
            Err(AppError::not_found("Pet not found"))
        }
    }
}

#[instrument(skip(state, payload), fields(pet_id = %pet_id))]
pub async fn update_pet(
    State(state): State<Arc<AppState>>,
    Path(pet_id): Path<i64>,
    payload: Result<Json<PetDTO>, JsonRejection>,
) -> Result<Json<PetDTO>, AppError> {
    let body = read_body(payload)?;
    let pet = state.pets.update_pet(pet_id, body).await?;
    Ok(Json(PetDTO::from(pet)))
}

#[instrument(skip(state), fields(pet_id = %pet_id))]
pub async fn delete_pet(
    State(state): State<Arc<AppState>>,
    Path(pet_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.pets.delete_pet(pet_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn get_pets_by_type(
    State(state): State<Arc<AppState>>,
    Path(pet_type): Path<String>,
) -> Result<Json<Vec<PetDTO>>, AppError> {
    let pets = state.pets.find_pets_by_type(&pet_type).await?;
    Ok(to_dtos(pets))
}

#[instrument(skip(state))]
pub async fn get_pets_by_owner_name(
    State(state): State<Arc<AppState>>,
    Path(owner_name): Path<String>,
) -> Result<Json<Vec<PetDTO>>, AppError> {
    let pets = state.pets.find_pets_by_owner_name(&owner_name).await?;
    Ok(to_dtos(pets))
}

#[instrument(skip(state))]
pub async fn get_pets_by_breed(
    State(state): State<Arc<AppState>>,
    Path(breed): Path<String>,
) -> Result<Json<Vec<PetDTO>>, AppError> {
    let pets = state.pets.find_pets_by_breed(&breed).await?;
    Ok(to_dtos(pets))
}

#[instrument(skip(state))]
pub async fn get_pets_born_after(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BornAfterQuery>, // ?date=YYYY-MM-DD
) -> Result<Json<Vec<PetDTO>>, AppError> {
    let pets = state.pets.find_pets_born_after(params.date).await?;
    Ok(to_dtos(pets))
}

#[instrument(skip(state))]
pub async fn get_pets_by_type_and_breed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TypeBreedQuery>, // ?type=...&breed=...
) -> Result<Json<Vec<PetDTO>>, AppError> {
    let pets = state
        .pets
        .find_pets_by_type_and_breed(params.pet_type.as_deref(), params.breed.as_deref())
        .await?;
    Ok(to_dtos(pets))
}

#[instrument(skip(state))]
pub async fn search_pets_by_name(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NameSearchQuery>, // ?name=...
) -> Result<Json<Vec<PetDTO>>, AppError> {
    let fragment = params.name.unwrap_or_default();
    let pets = state.pets.search_pets_by_name(&fragment).await?;
    info!("Found {} pets matching name search", pets.len());
    Ok(to_dtos(pets))
}
