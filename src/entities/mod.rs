//! Entities module - Domain entities
//!
//! Each entity maps one table of the database.

pub mod pet;

pub use pet::Pet;
