use crate::{
    model::api::PageRequest,
    server::{
        data::item::ItemRepository,
        model::item::{CreateItemParams, ItemPatch},
    },
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, item::ItemFactory},
};

mod create;
mod get_by_owner;
mod get_by_request_ids;
mod search_available;
mod update;
