use super::*;

/// Tests listing every user.
///
/// Expected: all users ordered by ID
#[tokio::test]
async fn returns_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    let ids: Vec<i32> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests loading several users at once.
///
/// Expected: only the requested users, missing IDs are skipped
#[tokio::test]
async fn finds_users_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let _second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let users = UserRepository::new(db)
        .find_by_ids(&[first.id, third.id, 999])
        .await?;

    let mut ids: Vec<i32> = users.iter().map(|user| user.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}
