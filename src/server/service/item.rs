use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::PageRequest, datetime},
    server::{
        data::{
            booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
            request::ItemRequestRepository, user::UserRepository,
        },
        error::{access::AccessError, booking::BookingError, AppError},
        model::{
            booking::{find_last_and_next, Booking},
            comment::{Comment, CreateCommentParams},
            item::{CreateItemParams, Item, ItemPatch, ItemWithBookings},
        },
    },
};

/// Groups values by the item they belong to.
fn group_by_item<T>(values: Vec<T>, item_id: impl Fn(&T) -> i32) -> HashMap<i32, Vec<T>> {
    let mut grouped: HashMap<i32, Vec<T>> = HashMap::new();
    for value in values {
        grouped.entry(item_id(&value)).or_default().push(value);
    }
    grouped
}

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new item for its owner.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(AppError::NotFound)` - Owner or referenced request does not exist
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, AppError> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn)
            .find_by_id(params.owner_id)
            .await?
            .is_none()
        {
            return Err(AppError::user_not_found(params.owner_id));
        }
        if let Some(request_id) = params.request_id {
            if ItemRequestRepository::new(&txn)
                .find_by_id(request_id)
                .await?
                .is_none()
            {
                return Err(AppError::request_not_found(request_id));
            }
        }

        let item = ItemRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!("Created item {} for owner {}", item.id, item.owner_id);

        Ok(item)
    }

    /// Applies a partial update to an item on behalf of its owner.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(AppError::NotFound)` - Item or caller does not exist
    /// - `Err(AppError::AccessErr)` - Caller is not the owner
    pub async fn update(
        &self,
        item_id: i32,
        caller_id: i32,
        patch: ItemPatch,
    ) -> Result<Item, AppError> {
        let txn = self.db.begin().await?;
        let repo = ItemRepository::new(&txn);

        let item = repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::item_not_found(item_id))?;
        if UserRepository::new(&txn)
            .find_by_id(caller_id)
            .await?
            .is_none()
        {
            return Err(AppError::user_not_found(caller_id));
        }
        if item.owner_id != caller_id {
            return Err(AccessError::NotItemOwner {
                user_id: caller_id,
                item_id,
            }
            .into());
        }

        let item = repo.update(item_id, patch).await?;

        txn.commit().await?;

        tracing::info!("Updated item {}", item.id);

        Ok(item)
    }

    /// Gets an item with its comments; the owner also sees the last and next bookings.
    ///
    /// # Returns
    /// - `Ok(ItemWithBookings)` - The enriched item
    /// - `Err(AppError::NotFound)` - Caller or item does not exist
    pub async fn get_by_id(&self, item_id: i32, caller_id: i32) -> Result<ItemWithBookings, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(caller_id)
            .await?
            .is_none()
        {
            return Err(AppError::user_not_found(caller_id));
        }
        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::item_not_found(item_id))?;

        let comments = CommentRepository::new(self.db)
            .get_by_item_ids(&[item_id])
            .await?;

        let (last_booking, next_booking) = if item.owner_id == caller_id {
            let bookings = BookingRepository::new(self.db)
                .get_approved_by_item_ids(&[item_id])
                .await?;
            find_last_and_next(&bookings, datetime::now())
        } else {
            (None, None)
        };

        Ok(ItemWithBookings {
            item,
            last_booking,
            next_booking,
            comments,
        })
    }

    /// Gets the owner's items ordered by ID, each with comments and last/next bookings.
    ///
    /// Runs one query for the items, one for their comments and one for their approved
    /// bookings, then groups the results by item in memory.
    ///
    /// # Returns
    /// - `Ok(Vec<ItemWithBookings>)` - Enriched items
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        page: Option<PageRequest>,
    ) -> Result<Vec<ItemWithBookings>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .is_none()
        {
            return Err(AppError::user_not_found(owner_id));
        }

        let items = ItemRepository::new(self.db)
            .get_by_owner(owner_id, page)
            .await?;
        let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();

        let comments = CommentRepository::new(self.db)
            .get_by_item_ids(&item_ids)
            .await?;
        let bookings = BookingRepository::new(self.db)
            .get_approved_by_item_ids(&item_ids)
            .await?;

        let mut comments = group_by_item(comments, |comment: &Comment| comment.item_id);
        let bookings = group_by_item(bookings, |booking: &Booking| booking.item_id);
        let now = datetime::now();

        Ok(items
            .into_iter()
            .map(|item| {
                let (last_booking, next_booking) = bookings
                    .get(&item.id)
                    .map(|bookings| find_last_and_next(bookings, now))
                    .unwrap_or((None, None));
                ItemWithBookings {
                    comments: comments.remove(&item.id).unwrap_or_default(),
                    item,
                    last_booking,
                    next_booking,
                }
            })
            .collect())
    }

    /// Searches available items by name or description, case-insensitively.
    ///
    /// A blank query returns an empty list without touching the database.
    pub async fn search(
        &self,
        text: &str,
        page: Option<PageRequest>,
    ) -> Result<Vec<Item>, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        Ok(ItemRepository::new(self.db)
            .search_available(text, page)
            .await?)
    }

    /// Adds a comment to an item on behalf of a former renter.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment carrying the author's name
    /// - `Err(AppError::NotFound)` - Item or author does not exist
    /// - `Err(AppError::BookingErr(ItemWasNotRented))` - Author has no finished approved
    ///   booking of the item
    pub async fn add_comment(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let txn = self.db.begin().await?;
        let now = datetime::now();

        if ItemRepository::new(&txn)
            .find_by_id(params.item_id)
            .await?
            .is_none()
        {
            return Err(AppError::item_not_found(params.item_id));
        }
        let author = UserRepository::new(&txn)
            .find_by_id(params.author_id)
            .await?
            .ok_or_else(|| AppError::user_not_found(params.author_id))?;

        if !BookingRepository::new(&txn)
            .has_finished_approved(author.id, params.item_id, now)
            .await?
        {
            return Err(BookingError::ItemWasNotRented {
                user_id: author.id,
                item_id: params.item_id,
            }
            .into());
        }

        let comment = CommentRepository::new(&txn)
            .create(params, author.name, now)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} commented on item {}",
            comment.author_id,
            comment.item_id
        );

        Ok(comment)
    }
}
