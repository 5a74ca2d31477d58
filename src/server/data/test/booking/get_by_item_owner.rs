use super::*;

/// Tests listing the bookings of an owner's items.
///
/// Expected: bookings of the owner's items only, regardless of who booked them
#[tokio::test]
async fn returns_bookings_of_owned_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, item, booking) = create_booking_with_dependencies(db).await?;
    let other_owner = factory::create_user(db).await?;
    let other_item = factory::create_item(db, other_owner.id).await?;
    factory::create_booking(db, other_item.id, booker.id).await?;

    let found = BookingRepository::new(db)
        .get_by_item_owner(owner.id, all(), factory::helpers::now())
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, booking.id);
    assert_eq!(found[0].item_id, item.id);

    Ok(())
}

/// Tests applying a state filter to the owner listing.
///
/// Expected: the future waiting booking is not PAST
#[tokio::test]
async fn applies_state_filter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, _) = create_booking_with_dependencies(db).await?;

    let found = BookingRepository::new(db)
        .get_by_item_owner(owner.id, in_state(BookingState::Past), factory::helpers::now())
        .await?;

    assert!(found.is_empty());

    Ok(())
}
