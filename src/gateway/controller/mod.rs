//! Gateway handlers: validate, then forward to the server.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;
