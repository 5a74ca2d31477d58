//! ShareIt backend: REST API, business rules and persistence.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for storage.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, header extraction and DTO conversion
//! - **Service Layer** (`service/`) - Business rules; every mutation runs in one transaction
//! - **Data Layer** (`data/`) - Repositories converting entities into domain models
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Route table, Swagger UI and tracing layer
//! - **Doc** (`doc`) - OpenAPI document
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
