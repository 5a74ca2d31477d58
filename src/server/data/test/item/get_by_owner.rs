use super::*;

/// Tests listing the items of one owner.
///
/// Expected: only that owner's items, ordered by ID
#[tokio::test]
async fn returns_owner_items_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_item(db, owner.id).await?;
    factory::create_item(db, other.id).await?;
    let second = factory::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db).get_by_owner(owner.id, None).await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests paging through an owner's items.
///
/// Expected: the second page of size two holds the third item only
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_item(db, owner.id).await?;
    factory::create_item(db, owner.id).await?;
    let third = factory::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db)
        .get_by_owner(owner.id, Some(PageRequest { page: 1, size: 2 }))
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, third.id);

    Ok(())
}
