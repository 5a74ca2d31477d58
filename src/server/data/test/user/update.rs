use super::*;

/// Tests updating only the name of a user.
///
/// Expected: Ok with the new name and the e-mail unchanged
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParams {
                name: Some("Renamed".to_string()),
                email: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests an update that changes nothing.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn empty_update_returns_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(user.id, UpdateUserParams::default())
        .await?;

    assert_eq!(updated.name, user.name);
    assert_eq!(updated.email, user.email);

    Ok(())
}
