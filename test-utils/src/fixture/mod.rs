//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of pure logic and for
//! conversion tests. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//!
//! let approved = fixture::booking::entity_builder()
//!     .id(7)
//!     .status("APPROVED")
//!     .build();
//! ```

pub mod booking;
pub mod item;
pub mod user;

pub use booking::{entity as booking_entity, entity_builder as booking_entity_builder};
pub use item::{entity as item_entity, entity_builder as item_entity_builder};
pub use user::entity as user_entity;
