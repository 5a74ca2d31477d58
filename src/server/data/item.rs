//! Item data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::api::PageRequest,
    server::{
        data::fetch_page_or_all,
        model::item::{CreateItemParams, Item, ItemPatch},
    },
};

/// Repository providing database operations for items.
pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new ItemRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new item.
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            name_lc: ActiveValue::Set(entity::item::search_key(&params.name)),
            description_lc: ActiveValue::Set(entity::item::search_key(&params.description)),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            available: ActiveValue::Set(params.available),
            owner_id: ActiveValue::Set(params.owner_id),
            request_id: ActiveValue::Set(params.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    /// Finds an item by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Loads every item whose ID is in `ids`.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Item>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Applies the supplied fields of the patch to an existing item.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item (unchanged if the patch is empty)
    /// - `Err(DbErr::RecordNotFound)` - No item with this ID
    pub async fn update(&self, id: i32, patch: ItemPatch) -> Result<Item, DbErr> {
        let item = entity::prelude::Item::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Item with id {} not found", id)))?;

        let mut active_model: entity::item::ActiveModel = item.clone().into();
        if let Some(name) = patch.name {
            active_model.name_lc = ActiveValue::Set(entity::item::search_key(&name));
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = patch.description {
            active_model.description_lc =
                ActiveValue::Set(entity::item::search_key(&description));
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(available) = patch.available {
            active_model.available = ActiveValue::Set(available);
        }

        if !active_model.is_changed() {
            return Ok(Item::from_entity(item));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Item::from_entity(entity))
    }

    /// Gets the items of an owner ordered by ID, optionally one page of them.
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        page: Option<PageRequest>,
    ) -> Result<Vec<Item>, DbErr> {
        let select = entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id);

        let entities = fetch_page_or_all(self.db, select, page).await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Searches available items whose name or description contains `text`.
    ///
    /// Matching runs against the lowercased shadow columns, so case is ignored for any
    /// script, not only ASCII.
    pub async fn search_available(
        &self,
        text: &str,
        page: Option<PageRequest>,
    ) -> Result<Vec<Item>, DbErr> {
        let key = entity::item::search_key(text);
        let select = entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .filter(
                Condition::any()
                    .add(entity::item::Column::NameLc.contains(&key))
                    .add(entity::item::Column::DescriptionLc.contains(&key)),
            )
            .order_by_asc(entity::item::Column::Id);

        let entities = fetch_page_or_all(self.db, select, page).await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets the items listed in response to any of the given requests, ordered by ID.
    pub async fn get_by_request_ids(&self, request_ids: &[i32]) -> Result<Vec<Item>, DbErr> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids.iter().copied()))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }
}
