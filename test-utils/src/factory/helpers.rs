//! Shared helper utilities for factory methods.
//!
//! Provides the ID counter used by every factory and convenience methods for creating
//! entities together with their dependencies.

use chrono::{Local, NaiveDateTime, SubsecRound};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Current local time truncated to whole seconds, matching what the server stores.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Creates an owner, a second user, an item of the owner and a WAITING booking of that
/// item by the second user.
///
/// All entities use default values. Use the individual factories to customize them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, booker, item, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::item::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let booker = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;
    let booking = crate::factory::booking::create_booking(db, item.id, booker.id).await?;

    Ok((owner, booker, item, booking))
}
