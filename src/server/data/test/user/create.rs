use super::*;

/// Tests registering a new user.
///
/// Expected: Ok with the generated ID and the given name and e-mail
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    Ok(())
}

/// Tests the unique constraint on e-mail.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Copycat".to_string(),
            email: existing.email,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
