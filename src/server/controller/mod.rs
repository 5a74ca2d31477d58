//! HTTP handlers of the ShareIt server.
//!
//! Handlers extract the caller from the `X-Sharer-User-Id` header, validate the body, convert
//! DTOs to service params and render the domain result back into DTOs.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;
