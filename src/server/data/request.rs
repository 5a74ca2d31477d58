//! Item request data repository for database operations.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::api::PageRequest,
    server::{
        data::fetch_page_or_all,
        model::request::{CreateItemRequestParams, ItemRequest},
    },
};

/// Repository providing database operations for item requests.
pub struct ItemRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an item request stamped with `created`.
    pub async fn create(
        &self,
        params: CreateItemRequestParams,
        created: NaiveDateTime,
    ) -> Result<ItemRequest, DbErr> {
        let entity = entity::item_request::ActiveModel {
            description: ActiveValue::Set(params.description),
            requester_id: ActiveValue::Set(params.requester_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ItemRequest::from_entity(entity))
    }

    /// Finds an item request by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ItemRequest>, DbErr> {
        let entity = entity::prelude::ItemRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ItemRequest::from_entity))
    }

    /// Gets a user's own requests, newest first.
    pub async fn get_by_requester(&self, requester_id: i32) -> Result<Vec<ItemRequest>, DbErr> {
        let entities = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.eq(requester_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }

    /// Gets the requests of every other user, newest first, optionally one page of them.
    pub async fn get_by_other_requesters(
        &self,
        requester_id: i32,
        page: Option<PageRequest>,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        let select = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.ne(requester_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id);

        let entities = fetch_page_or_all(self.db, select, page).await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }
}
