//! Services module - Business logic on top of the repositories

pub mod pet;

pub use pet::PetService;
