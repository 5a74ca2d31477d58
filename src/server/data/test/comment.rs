use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, comment::CommentFactory, user::UserFactory},
};

use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};

/// Tests storing a comment.
///
/// Expected: Ok with the given text, timestamp and author name
#[tokio::test]
async fn creates_comment_with_author_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let author = UserFactory::new(db).name("Bob").build().await?;
    let item = factory::create_item(db, owner.id).await?;
    let created = factory::helpers::now();

    let comment = CommentRepository::new(db)
        .create(
            CreateCommentParams {
                item_id: item.id,
                author_id: author.id,
                text: "Worked great".to_string(),
            },
            author.name.clone(),
            created,
        )
        .await?;

    assert_eq!(comment.text, "Worked great");
    assert_eq!(comment.author_name, "Bob");
    assert_eq!(comment.created, created);
    assert_eq!(comment.item_id, item.id);

    Ok(())
}

/// Tests loading the comments of several items.
///
/// Expected: comments of the given items, oldest first, each with its author's name
#[tokio::test]
async fn returns_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let author = UserFactory::new(db).name("Carol").build().await?;
    let item = factory::create_item(db, owner.id).await?;
    let other_item = factory::create_item(db, owner.id).await?;
    let unrelated_item = factory::create_item(db, owner.id).await?;
    let now = factory::helpers::now();

    let newer = CommentFactory::new(db, item.id, author.id)
        .created(now)
        .build()
        .await?;
    let older = CommentFactory::new(db, other_item.id, author.id)
        .created(now - Duration::hours(1))
        .build()
        .await?;
    factory::create_comment(db, unrelated_item.id, author.id).await?;

    let comments = CommentRepository::new(db)
        .get_by_item_ids(&[item.id, other_item.id])
        .await?;

    let ids: Vec<i32> = comments.iter().map(|comment| comment.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);
    assert!(comments.iter().all(|comment| comment.author_name == "Carol"));

    Ok(())
}
