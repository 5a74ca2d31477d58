//! Item fixtures for creating in-memory test data.

use entity::item;

/// Default test item name.
pub const DEFAULT_NAME: &str = "Test Item";

/// Default test item description.
pub const DEFAULT_DESCRIPTION: &str = "Test item description";

/// Default owner ID for items.
pub const DEFAULT_OWNER_ID: i32 = 1;

/// Creates an available item entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Item"`
/// - description: `"Test item description"`
/// - available: `true`
/// - owner_id: `1`
/// - request_id: `None`
pub fn entity() -> item::Model {
    entity_builder().build()
}

/// Creates an item entity builder for customization.
pub fn entity_builder() -> ItemEntityBuilder {
    ItemEntityBuilder::default()
}

/// Builder for creating customized item entity models.
pub struct ItemEntityBuilder {
    id: i32,
    name: String,
    description: String,
    available: bool,
    owner_id: i32,
    request_id: Option<i32>,
}

impl Default for ItemEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            available: true,
            owner_id: DEFAULT_OWNER_ID,
            request_id: None,
        }
    }
}

impl ItemEntityBuilder {
    /// Sets the item ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the item is available.
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Sets the owner ID.
    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Sets the originating request ID.
    pub fn request_id(mut self, request_id: Option<i32>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Builds and returns the item entity model.
    pub fn build(self) -> item::Model {
        item::Model {
            id: self.id,
            name_lc: item::search_key(&self.name),
            description_lc: item::search_key(&self.description),
            name: self.name,
            description: self.description,
            available: self.available,
            owner_id: self.owner_id,
            request_id: self.request_id,
        }
    }
}
