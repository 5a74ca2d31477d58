use super::*;

/// Tests the time-based state filters of a booker's listing.
///
/// Each booking appears in exactly one of CURRENT, PAST and FUTURE, while ALL returns
/// every booking.
///
/// Expected: one booking per time-based state, three for ALL
#[tokio::test]
async fn partitions_bookings_by_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let now = factory::helpers::now();

    let past = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(5))
        .end(now - Duration::days(4))
        .build()
        .await?;
    let current = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(1))
        .end(now + Duration::days(1))
        .build()
        .await?;
    let future = BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(3))
        .end(now + Duration::days(4))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let ids = |bookings: Vec<crate::server::model::booking::Booking>| -> Vec<i32> {
        bookings.into_iter().map(|booking| booking.id).collect()
    };

    assert_eq!(
        ids(repo.get_by_booker(booker.id, in_state(BookingState::Past), now).await?),
        vec![past.id]
    );
    assert_eq!(
        ids(repo.get_by_booker(booker.id, in_state(BookingState::Current), now).await?),
        vec![current.id]
    );
    assert_eq!(
        ids(repo.get_by_booker(booker.id, in_state(BookingState::Future), now).await?),
        vec![future.id]
    );
    assert_eq!(
        ids(repo.get_by_booker(booker.id, all(), now).await?),
        vec![future.id, current.id, past.id]
    );

    Ok(())
}

/// Tests the status-based state filters.
///
/// Expected: WAITING and REJECTED each return only bookings with that status
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let waiting = factory::create_booking(db, item.id, booker.id).await?;
    let rejected = BookingFactory::new(db, item.id, booker.id)
        .status("REJECTED")
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = factory::helpers::now();

    let found = repo
        .get_by_booker(booker.id, in_state(BookingState::Waiting), now)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, waiting.id);

    let found = repo
        .get_by_booker(booker.id, in_state(BookingState::Rejected), now)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, rejected.id);

    Ok(())
}

/// Tests that a listing only contains the booker's own bookings.
///
/// Expected: bookings of other users are excluded
#[tokio::test]
async fn excludes_other_bookers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booker, item, booking) = create_booking_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    factory::create_booking(db, item.id, stranger.id).await?;

    let found = BookingRepository::new(db)
        .get_by_booker(booker.id, all(), factory::helpers::now())
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, booking.id);

    Ok(())
}

/// Tests paging a booker's listing.
///
/// Expected: page 1 of size 1 is the second latest booking
#[tokio::test]
async fn returns_requested_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let now = factory::helpers::now();
    let earlier = BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(2))
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(5))
        .end(now + Duration::days(6))
        .build()
        .await?;

    let found = BookingRepository::new(db)
        .get_by_booker(
            booker.id,
            BookingQuery {
                state: BookingState::All,
                page: Some(crate::model::api::PageRequest { page: 1, size: 1 }),
            },
            now,
        )
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, earlier.id);

    Ok(())
}
