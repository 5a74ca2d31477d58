//! Item domain models and parameters.

use crate::{
    model::item::{CreateItemDto, ItemDto, ItemExtraInfoDto, UpdateItemDto},
    server::model::{booking::Booking, comment::Comment},
};

/// Rentable item listed by its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    /// Request this item was listed in response to, if any.
    pub request_id: Option<i32>,
}

impl Item {
    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            request_id: self.request_id,
        }
    }

    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id: entity.request_id,
        }
    }
}

/// Item enriched with its comments and, for the owner's view, the last and next
/// approved bookings.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithBookings {
    pub item: Item,
    pub last_booking: Option<Booking>,
    pub next_booking: Option<Booking>,
    pub comments: Vec<Comment>,
}

impl ItemWithBookings {
    pub fn into_dto(self) -> ItemExtraInfoDto {
        ItemExtraInfoDto {
            id: self.item.id,
            name: self.item.name,
            description: self.item.description,
            available: self.item.available,
            request_id: self.item.request_id,
            last_booking: self.last_booking.map(Booking::into_short_dto),
            next_booking: self.next_booking.map(Booking::into_short_dto),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Parameters for listing a new item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

impl CreateItemParams {
    pub fn from_dto(owner_id: i32, dto: CreateItemDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
            request_id: dto.request_id,
        }
    }
}

/// Partial item update. Every field is optional and `None` means "unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl ItemPatch {
    pub fn from_dto(dto: UpdateItemDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            available: dto.available,
        }
    }
}
