use super::*;

/// Tests loading approved bookings for several items.
///
/// Expected: only APPROVED bookings of the given items
#[tokio::test]
async fn returns_only_approved_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let other_item = factory::create_item(db, owner.id).await?;
    let approved = BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .build()
        .await?;
    factory::create_booking(db, item.id, booker.id).await?;
    BookingFactory::new(db, other_item.id, booker.id)
        .status("APPROVED")
        .build()
        .await?;

    let found = BookingRepository::new(db)
        .get_approved_by_item_ids(&[item.id])
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, approved.id);

    Ok(())
}
