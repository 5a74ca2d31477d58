//! ShareIt Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the ShareIt
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for seeding rows, and fixtures for in-memory entity models.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//! - **fixture**: Entity models built in memory without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_item_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_shareit_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
