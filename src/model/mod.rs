//! Wire models shared by the server and the gateway.
//!
//! DTOs in this module define the JSON shapes of the public REST surface (camelCase field
//! names, `yyyy-MM-ddTHH:mm:ss` timestamps) along with the request validation both
//! services agree on.

pub mod api;
pub mod booking;
pub mod comment;
pub mod datetime;
pub mod item;
pub mod request;
pub mod user;
pub mod validation;
