//! Core Module - Infrastructure components of the application
//!
//! - Configuration
//! - Error handling
//! - Application state

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{AppError, ServiceError};
pub use state::AppState;
