//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let owner = factory::create_user(&db).await?;
//!     let item = factory::create_item(&db, owner.id).await?;
//!
//!     // Owner, booker, item and a WAITING booking in one call
//!     let (owner, booker, item, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, item.id, booker.id)
//!     .status("APPROVED")
//!     .start(now - Duration::days(7))
//!     .end(now - Duration::days(5))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `item_request` - Create item request entities
//! - `item` - Create item entities
//! - `booking` - Create booking entities
//! - `comment` - Create comment entities
//! - `helpers` - ID generation and entities created together with their dependencies

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;

pub use booking::create_booking;
pub use comment::create_comment;
pub use item::create_item;
pub use item_request::create_item_request;
pub use user::create_user;
