use super::*;

/// Tests a partial update touching only availability.
///
/// Expected: Ok with availability flipped and name/description untouched
#[tokio::test]
async fn applies_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let item = ItemFactory::new(db, owner.id)
        .name("Ladder")
        .description("Three metres")
        .build()
        .await?;

    let updated = ItemRepository::new(db)
        .update(
            item.id,
            ItemPatch {
                available: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated.available);
    assert_eq!(updated.name, "Ladder");
    assert_eq!(updated.description, "Three metres");

    Ok(())
}

/// Tests an empty patch.
///
/// Expected: Ok with the stored item
#[tokio::test]
async fn empty_patch_keeps_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;

    let updated = ItemRepository::new(db)
        .update(item.id, ItemPatch::default())
        .await?;

    assert_eq!(updated.name, item.name);
    assert_eq!(updated.available, item.available);

    Ok(())
}

/// Tests that renaming an item is reflected in search.
///
/// Expected: found by the new name, not by the old one
#[tokio::test]
async fn rename_updates_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let item = ItemFactory::new(db, owner.id)
        .name("Пила")
        .description("Ручная")
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    repo.update(
        item.id,
        ItemPatch {
            name: Some("Рубанок".to_string()),
            ..Default::default()
        },
    )
    .await?;

    assert!(repo.search_available("пила", None).await?.is_empty());
    let found = repo.search_available("РУБАНОК", None).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, item.id);

    Ok(())
}
