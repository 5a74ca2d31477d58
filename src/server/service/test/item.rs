use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::create_booking_with_dependencies, user::UserFactory},
};

use crate::server::{
    error::{access::AccessError, booking::BookingError, AppError},
    model::{
        comment::CreateCommentParams,
        item::{CreateItemParams, ItemPatch},
    },
    service::item::ItemService,
};

fn item_params(owner_id: i32, request_id: Option<i32>) -> CreateItemParams {
    CreateItemParams {
        owner_id,
        name: "Tent".to_string(),
        description: "Two person tent".to_string(),
        available: true,
        request_id,
    }
}

/// Tests listing an item for an unknown owner or request.
///
/// Expected: Err(NotFound) naming the missing entity
#[tokio::test]
async fn create_requires_owner_and_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let service = ItemService::new(db);

    assert!(matches!(
        service.create(item_params(999, None)).await,
        Err(AppError::NotFound { entity: "User", .. })
    ));
    assert!(matches!(
        service.create(item_params(owner.id, Some(999))).await,
        Err(AppError::NotFound { entity: "Item request", .. })
    ));

    Ok(())
}

/// Tests updating an item by someone other than its owner.
///
/// Expected: Err(AccessErr(NotItemOwner))
#[tokio::test]
async fn update_requires_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;

    let result = ItemService::new(db)
        .update(
            item.id,
            stranger.id,
            ItemPatch {
                name: Some("Mine now".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AccessErr(AccessError::NotItemOwner { .. }))
    ));

    Ok(())
}

/// Tests the owner's view of an item with past and future approved bookings.
///
/// Bookings at (-7d..-5d) and (+2d..+4d) are approved, a waiting one lies in between.
///
/// Expected: next is the +2d booking, last the -7d booking; other users see neither
#[tokio::test]
async fn owner_sees_last_and_next_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let now = factory::helpers::now();

    let past = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(7))
        .end(now - Duration::days(5))
        .status("APPROVED")
        .build()
        .await?;
    let upcoming = BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(2))
        .end(now + Duration::days(4))
        .status("APPROVED")
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(1) + Duration::hours(2))
        .build()
        .await?;

    let service = ItemService::new(db);

    let owner_view = service.get_by_id(item.id, owner.id).await?;
    assert_eq!(owner_view.next_booking.map(|booking| booking.id), Some(upcoming.id));
    assert_eq!(owner_view.last_booking.map(|booking| booking.id), Some(past.id));

    let booker_view = service.get_by_id(item.id, booker.id).await?;
    assert!(booker_view.last_booking.is_none());
    assert!(booker_view.next_booking.is_none());

    Ok(())
}

/// Tests viewing an item as an unknown user.
///
/// Expected: Err(NotFound) for the caller
#[tokio::test]
async fn get_requires_existing_caller() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;

    assert!(matches!(
        ItemService::new(db).get_by_id(item.id, 999).await,
        Err(AppError::NotFound { entity: "User", id: 999 })
    ));

    Ok(())
}

/// Tests the owner's item list with comments and bookings grouped per item.
///
/// Expected: items ordered by ID, each carrying only its own comments and bookings
#[tokio::test]
async fn owner_items_are_enriched_per_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let first = factory::create_item(db, owner.id).await?;
    let second = factory::create_item(db, owner.id).await?;
    let now = factory::helpers::now();

    let booking = BookingFactory::new(db, second.id, booker.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(2))
        .status("APPROVED")
        .build()
        .await?;
    let comment = factory::create_comment(db, first.id, booker.id).await?;

    let items = ItemService::new(db).get_by_owner(owner.id, None).await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item.id, first.id);
    assert_eq!(items[0].comments.len(), 1);
    assert_eq!(items[0].comments[0].id, comment.id);
    assert!(items[0].next_booking.is_none());
    assert_eq!(items[1].item.id, second.id);
    assert!(items[1].comments.is_empty());
    assert_eq!(items[1].next_booking.as_ref().map(|b| b.id), Some(booking.id));

    Ok(())
}

/// Tests searching with blank text.
///
/// Expected: empty list
#[tokio::test]
async fn blank_search_returns_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_item(db, owner.id).await?;

    let items = ItemService::new(db).search("   ", None).await?;

    assert!(items.is_empty());

    Ok(())
}

/// Tests commenting after a finished approved booking.
///
/// Expected: Ok with the author's name on the comment
#[tokio::test]
async fn former_renter_can_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = UserFactory::new(db).name("Dana").build().await?;
    let item = factory::create_item(db, owner.id).await?;
    let now = factory::helpers::now();
    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(3))
        .end(now - Duration::days(1))
        .status("APPROVED")
        .build()
        .await?;

    let comment = ItemService::new(db)
        .add_comment(CreateCommentParams {
            item_id: item.id,
            author_id: booker.id,
            text: "Solid tent".to_string(),
        })
        .await?;

    assert_eq!(comment.author_name, "Dana");
    assert_eq!(comment.text, "Solid tent");

    let view = ItemService::new(db).get_by_id(item.id, owner.id).await?;
    assert_eq!(view.comments.len(), 1);

    Ok(())
}

/// Tests commenting without a finished approved booking.
///
/// Expected: Err(BookingErr(ItemWasNotRented))
#[tokio::test]
async fn comment_requires_finished_rental() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booker, item, _) = create_booking_with_dependencies(db).await?;

    let result = ItemService::new(db)
        .add_comment(CreateCommentParams {
            item_id: item.id,
            author_id: booker.id,
            text: "Not yet".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::ItemWasNotRented { .. }))
    ));

    Ok(())
}
