use super::*;

/// Tests placing a booking.
///
/// Expected: Ok with status WAITING and the given dates
#[tokio::test]
async fn creates_waiting_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let start = factory::helpers::now() + Duration::days(1);
    let end = start + Duration::days(2);

    let booking = BookingRepository::new(db)
        .create(CreateBookingParams {
            booker_id: booker.id,
            item_id: item.id,
            start,
            end,
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Waiting);
    assert_eq!(booking.start, start);
    assert_eq!(booking.end, end);
    assert_eq!(booking.item_id, item.id);
    assert_eq!(booking.booker_id, booker.id);

    Ok(())
}

/// Tests reading a booking whose status column holds an unknown value.
///
/// Expected: Err with an internal error
#[tokio::test]
async fn unknown_status_is_internal_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let booking = BookingFactory::new(db, item.id, booker.id)
        .status("LOST")
        .build()
        .await?;

    let result = BookingRepository::new(db).find_by_id(booking.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
