//! ShareIt: a peer-to-peer item rental marketplace.
//!
//! The crate ships two HTTP services:
//!
//! - **server** (`server` feature) - business rules and persistence on SQLite through SeaORM
//! - **gateway** (`gateway` feature) - validates request shape and forwards valid requests
//!   to the server, relaying its responses unchanged
//!
//! Both expose the same REST surface and share the wire models in [`model`] and the request
//! extractors in [`api`].

pub mod api;
pub mod config;
pub mod model;

#[cfg(feature = "gateway")]
pub mod gateway;

#[cfg(feature = "server")]
pub mod server;
