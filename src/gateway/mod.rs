//! ShareIt gateway: the public entry point in front of the server.
//!
//! The gateway checks the shape of every request (caller header, required fields, e-mail
//! format, booking dates, state names, pagination) and forwards valid requests to the server
//! unchanged. The server's status code and body are relayed to the client as they are.
//! Nothing is persisted here.
//!
//! # Feature Gates
//!
//! This module is only available with the `gateway` feature flag enabled.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod state;
