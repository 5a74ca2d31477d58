//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models, so entity
//! models never leave this layer. Every repository is generic over `ConnectionTrait` and
//! runs equally on the pooled connection or inside a service's transaction.

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Select};

use crate::model::api::PageRequest;

/// Runs `select`, restricted to one page when a page request is given.
///
/// # Arguments
/// - `db` - Connection or transaction to run the query on
/// - `select` - Fully filtered and ordered query
/// - `page` - Optional page; `None` returns every row
pub(crate) async fn fetch_page_or_all<C, E>(
    db: &C,
    select: Select<E>,
    page: Option<PageRequest>,
) -> Result<Vec<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync,
{
    match page {
        Some(page) => select.paginate(db, page.size).fetch_page(page.page).await,
        None => select.all(db).await,
    }
}
