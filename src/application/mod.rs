// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the domain and services
// - It provides the boundary toward a presentation layer
// - It translates between DTOs and domain state

pub mod dto;
pub mod state;

pub use dto::*;
pub use state::AppState;
