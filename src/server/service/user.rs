use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
};

fn email_conflict(email: &str) -> AppError {
    AppError::Conflict(format!("The e-mail {} is already in use!", email))
}

/// Maps a unique violation on insert or update to `Conflict`.
fn map_unique_violation(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_conflict(email),
        _ => err.into(),
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - The e-mail is already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(email_conflict(&params.email));
        }

        let email = params.email.clone();
        let user = repo
            .create(params)
            .await
            .map_err(|err| map_unique_violation(err, &email))?;

        txn.commit().await?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Updates the supplied fields of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with this ID
    /// - `Err(AppError::Conflict)` - The new e-mail belongs to another user
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::user_not_found(id));
        }

        if let Some(email) = &params.email {
            if let Some(holder) = repo.find_by_email(email).await? {
                if holder.id != id {
                    return Err(email_conflict(email));
                }
            }
        }

        let email = params.email.clone().unwrap_or_default();
        let user = repo
            .update(id, params)
            .await
            .map_err(|err| map_unique_violation(err, &email))?;

        txn.commit().await?;

        tracing::info!("Updated user {}", user.id);

        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    /// Gets all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - The user was deleted
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !UserRepository::new(&txn).delete(id).await? {
            return Err(AppError::user_not_found(id));
        }

        txn.commit().await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
