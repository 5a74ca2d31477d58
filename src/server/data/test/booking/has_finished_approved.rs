use super::*;

/// Tests the rental check used before commenting.
///
/// Expected: true only for an APPROVED booking that has already ended
#[tokio::test]
async fn requires_approved_and_finished_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let now = factory::helpers::now();

    let repo = BookingRepository::new(db);

    // finished but rejected
    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(3))
        .end(now - Duration::days(2))
        .status("REJECTED")
        .build()
        .await?;
    // approved but still running
    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(1))
        .end(now + Duration::days(1))
        .status("APPROVED")
        .build()
        .await?;
    assert!(!repo.has_finished_approved(booker.id, item.id, now).await?);

    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(7))
        .end(now - Duration::days(5))
        .status("APPROVED")
        .build()
        .await?;
    assert!(repo.has_finished_approved(booker.id, item.id, now).await?);
    assert!(!repo.has_finished_approved(owner.id, item.id, now).await?);

    Ok(())
}
