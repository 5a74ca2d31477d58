//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs
//! at the controller boundary, so neither SeaORM entities nor wire types leak into the
//! service layer.

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;
