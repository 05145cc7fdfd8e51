//! Pet DTOs - Data Transfer Objects for pets

use crate::entities::Pet;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

lazy_static! {
    static ref OWNER_EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@.+$").unwrap();
}

/// Pet as exchanged with the client.
///
/// Every field is optional on input so that missing values reach the service
/// and are rejected there with a 400 instead of a deserialization error.
/// `id` and `age` are ignored on input.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetDTO {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub owner_name: Option<String>,
    #[validate(custom(function = "validate_owner_email"))]
    pub owner_email: Option<String>,
    pub age: Option<i32>,
}

impl PetDTO {
    /// Name and type present and not blank, birth date present
    pub fn is_valid(&self) -> bool {
        is_filled(&self.name) && is_filled(&self.pet_type) && self.birth_date.is_some()
    }

    /// Strict persistence payload, `None` when the pet is not valid
    pub fn into_create_dto(self) -> Option<CreatePetDTO> {
        if !self.is_valid() {
            return None;
        }
        Some(CreatePetDTO {
            name: self.name?,
            pet_type: self.pet_type?,
            breed: self.breed,
            birth_date: self.birth_date?,
            owner_name: self.owner_name,
            owner_email: self.owner_email,
        })
    }
}

impl From<Pet> for PetDTO {
    fn from(value: Pet) -> Self {
        let age = value.age();
        Self {
            id: Some(value.id),
            name: Some(value.name),
            pet_type: Some(value.pet_type),
            breed: value.breed,
            birth_date: Some(value.birth_date),
            owner_name: value.owner_name,
            owner_email: value.owner_email,
            age: Some(age),
        }
    }
}

/// DTO to insert a new pet (no id, assigned by the database)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatePetDTO {
    pub name: String,
    pub pet_type: String,
    pub breed: Option<String>,
    pub birth_date: NaiveDate,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

/// Full replacement of every mutable column: omitted optional fields are
/// written as NULL, never kept from the stored row.
pub type UpdatePetDTO = CreatePetDTO;

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// An empty address counts as no address
fn validate_owner_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || OWNER_EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("owner_email"))
    }
}
