//! DTOs module - Data Transfer Objects
//!
//! DTOs separate the external (API) representation from the internal one (entities).

pub mod pet;
pub mod query;

pub use pet::{CreatePetDTO, PetDTO, UpdatePetDTO};
pub use query::{BornAfterQuery, NameSearchQuery, TypeBreedQuery};
