use super::*;

/// Tests approving a waiting booking.
///
/// Expected: Ok with status APPROVED persisted
#[tokio::test]
async fn persists_new_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let updated = repo.set_status(booking.id, BookingStatus::Approved).await?;

    assert_eq!(updated.status, BookingStatus::Approved);
    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Approved);

    Ok(())
}

/// Tests deciding a booking that was already decided.
///
/// Expected: Err(AlreadyApproved) and the first decision kept
#[tokio::test]
async fn only_waiting_bookings_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    repo.set_status(booking.id, BookingStatus::Rejected).await?;
    let result = repo.set_status(booking.id, BookingStatus::Approved).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::AlreadyApproved))
    ));
    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Rejected);

    Ok(())
}

/// Tests deciding a booking that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingRepository::new(db)
        .set_status(99, BookingStatus::Approved)
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));

    Ok(())
}
