//! Item factory for creating test item entities.
//!
//! Items are created available by default so bookings can be placed on them without
//! further setup.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::item::ItemFactory;
///
/// let item = ItemFactory::new(&db, owner.id)
///     .name("Drill")
///     .available(false)
///     .build()
///     .await?;
/// ```
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: String,
    available: bool,
    request_id: Option<i32>,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - description: `"Test item description"`
    /// - available: `true`
    /// - request_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user listing the item
    ///
    /// # Returns
    /// - `ItemFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Item {}", next_id()),
            description: "Test item description".to_string(),
            available: true,
            request_id: None,
        }
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the item description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets whether the item can be booked.
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Links the item to the request it fulfils.
    pub fn request_id(mut self, request_id: Option<i32>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Builds and inserts the item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            name_lc: ActiveValue::Set(entity::item::search_key(&self.name)),
            description_lc: ActiveValue::Set(entity::item::search_key(&self.description)),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            available: ActiveValue::Set(self.available),
            owner_id: ActiveValue::Set(self.owner_id),
            request_id: ActiveValue::Set(self.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available item with default values for the given owner.
///
/// Shorthand for `ItemFactory::new(db, owner_id).build().await`.
pub async fn create_item(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, owner_id).build().await
}
