use super::*;

/// Tests looking a user up by e-mail.
///
/// Expected: Some for a registered e-mail, None otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email(&user.email).await?;
    assert_eq!(found.map(|found| found.id), Some(user.id));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
