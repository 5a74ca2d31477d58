use super::*;

/// Tests loading the items that answer a set of requests.
///
/// Expected: only items linked to the given requests
#[tokio::test]
async fn returns_items_of_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let requester = factory::create_user(db).await?;
    let request = factory::create_item_request(db, requester.id).await?;
    let other_request = factory::create_item_request(db, requester.id).await?;
    let answer = ItemFactory::new(db, owner.id)
        .request_id(Some(request.id))
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .request_id(Some(other_request.id))
        .build()
        .await?;
    factory::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db)
        .get_by_request_ids(&[request.id])
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, answer.id);

    Ok(())
}

/// Tests the empty input shortcut.
///
/// Expected: empty result
#[tokio::test]
async fn empty_ids_return_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ItemRepository::new(db).get_by_request_ids(&[]).await?.is_empty());

    Ok(())
}
