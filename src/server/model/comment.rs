//! Comment domain models and parameters.

use chrono::NaiveDateTime;

use crate::model::comment::CommentDto;

/// Comment left on an item by a former renter.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub item_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub created: NaiveDateTime,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author_name: self.author_name,
            created: self.created,
        }
    }

    /// Converts an entity model to a comment, taking the author's display name from the
    /// joined user row.
    pub fn from_entity(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            item_id: entity.item_id,
            author_id: entity.author_id,
            author_name,
            created: entity.created,
        }
    }
}

/// Parameters for adding a comment.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub item_id: i32,
    pub author_id: i32,
    pub text: String,
}
