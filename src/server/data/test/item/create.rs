use super::*;

/// Tests listing an item that answers a request.
///
/// Expected: Ok with the request ID stored
#[tokio::test]
async fn creates_item_linked_to_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let requester = factory::create_user(db).await?;
    let request = factory::create_item_request(db, requester.id).await?;

    let item = ItemRepository::new(db)
        .create(CreateItemParams {
            owner_id: owner.id,
            name: "Drill".to_string(),
            description: "Cordless drill".to_string(),
            available: true,
            request_id: Some(request.id),
        })
        .await?;

    assert_eq!(item.owner_id, owner.id);
    assert_eq!(item.name, "Drill");
    assert!(item.available);
    assert_eq!(item.request_id, Some(request.id));

    Ok(())
}
