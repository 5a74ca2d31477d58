//! Comment data repository for database operations.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

/// Repository providing database operations for comments.
pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a comment stamped with `created`.
    ///
    /// # Arguments
    /// - `params` - Item, author and text of the comment
    /// - `author_name` - Display name of the author, carried into the returned comment
    /// - `created` - Creation timestamp
    pub async fn create(
        &self,
        params: CreateCommentParams,
        author_name: String,
        created: NaiveDateTime,
    ) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            text: ActiveValue::Set(params.text),
            item_id: ActiveValue::Set(params.item_id),
            author_id: ActiveValue::Set(params.author_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity, author_name))
    }

    /// Gets the comments of the given items with their authors' names, oldest first.
    pub async fn get_by_item_ids(&self, item_ids: &[i32]) -> Result<Vec<Comment>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.is_in(item_ids.iter().copied()))
            .order_by_asc(entity::comment::Column::Created)
            .order_by_asc(entity::comment::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| {
                let author_name = author.map(|author| author.name).unwrap_or_default();
                Comment::from_entity(comment, author_name)
            })
            .collect())
    }
}
