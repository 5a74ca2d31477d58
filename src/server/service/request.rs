use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::PageRequest, datetime},
    server::{
        data::{item::ItemRepository, request::ItemRequestRepository, user::UserRepository},
        error::AppError,
        model::{
            item::Item,
            request::{CreateItemRequestParams, ItemRequest, ItemRequestWithItems},
        },
    },
};

/// Loads the items fulfilling each request in one query and attaches them.
async fn attach_items<C: ConnectionTrait>(
    db: &C,
    requests: Vec<ItemRequest>,
) -> Result<Vec<ItemRequestWithItems>, AppError> {
    let request_ids: Vec<i32> = requests.iter().map(|request| request.id).collect();
    let items = ItemRepository::new(db)
        .get_by_request_ids(&request_ids)
        .await?;

    let mut by_request: HashMap<i32, Vec<Item>> = HashMap::new();
    for item in items {
        if let Some(request_id) = item.request_id {
            by_request.entry(request_id).or_default().push(item);
        }
    }

    Ok(requests
        .into_iter()
        .map(|request| ItemRequestWithItems {
            items: by_request.remove(&request.id).unwrap_or_default(),
            request,
        })
        .collect())
}

pub struct ItemRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new item request stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(ItemRequestWithItems)` - The request, with no items yet
    /// - `Err(AppError::NotFound)` - No user with the requester ID
    pub async fn create(
        &self,
        params: CreateItemRequestParams,
    ) -> Result<ItemRequestWithItems, AppError> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn)
            .find_by_id(params.requester_id)
            .await?
            .is_none()
        {
            return Err(AppError::user_not_found(params.requester_id));
        }

        let request = ItemRequestRepository::new(&txn)
            .create(params, datetime::now())
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created item request {} for user {}",
            request.id,
            request.requester_id
        );

        Ok(ItemRequestWithItems {
            request,
            items: Vec::new(),
        })
    }

    /// Gets the caller's own requests, newest first, with their items.
    pub async fn get_own(&self, user_id: i32) -> Result<Vec<ItemRequestWithItems>, AppError> {
        self.require_user(user_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .get_by_requester(user_id)
            .await?;

        attach_items(self.db, requests).await
    }

    /// Gets other users' requests, newest first, with their items.
    pub async fn get_others(
        &self,
        user_id: i32,
        page: Option<PageRequest>,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        self.require_user(user_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .get_by_other_requesters(user_id, page)
            .await?;

        attach_items(self.db, requests).await
    }

    /// Gets one request with its items.
    ///
    /// # Returns
    /// - `Ok(ItemRequestWithItems)` - The request
    /// - `Err(AppError::NotFound)` - Caller or request does not exist
    pub async fn get_by_id(
        &self,
        request_id: i32,
        user_id: i32,
    ) -> Result<ItemRequestWithItems, AppError> {
        self.require_user(user_id).await?;

        let request = ItemRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::request_not_found(request_id))?;

        attach_items(self.db, vec![request])
            .await?
            .pop()
            .ok_or_else(|| AppError::request_not_found(request_id))
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::user_not_found(user_id))
    }
}
