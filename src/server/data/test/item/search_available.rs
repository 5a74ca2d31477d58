use super::*;

/// Tests matching the search text against name or description, ignoring case.
///
/// Expected: both items containing "drill" are found
#[tokio::test]
async fn matches_name_or_description_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let by_name = ItemFactory::new(db, owner.id)
        .name("Power DRILL")
        .description("Heavy")
        .build()
        .await?;
    let by_description = ItemFactory::new(db, owner.id)
        .name("Toolbox")
        .description("Comes with a drill bit set")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Hammer")
        .description("Steel")
        .build()
        .await?;

    let items = ItemRepository::new(db).search_available("dRiLl", None).await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![by_name.id, by_description.id]);

    Ok(())
}

/// Tests that unavailable items are never returned by search.
///
/// Expected: empty result
#[tokio::test]
async fn skips_unavailable_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    ItemFactory::new(db, owner.id)
        .name("Drill")
        .available(false)
        .build()
        .await?;

    let items = ItemRepository::new(db).search_available("drill", None).await?;

    assert!(items.is_empty());

    Ok(())
}

/// Tests case-insensitive search over Cyrillic names and descriptions.
///
/// Expected: both items are found for a lowercase query
#[tokio::test]
async fn matches_cyrillic_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let by_name = ItemFactory::new(db, owner.id)
        .name("Дрель")
        .description("Ударная")
        .build()
        .await?;
    let by_description = ItemFactory::new(db, owner.id)
        .name("Набор")
        .description("ДРЕЛЬ и свёрла")
        .build()
        .await?;

    let items = ItemRepository::new(db).search_available("дрель", None).await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![by_name.id, by_description.id]);

    Ok(())
}
