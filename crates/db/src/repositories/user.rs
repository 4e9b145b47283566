//! User repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::UserRole, users};

/// User repository for the identity rows the ledger refers to.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .filter(users::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        user_name: &str,
        email: &str,
        role: UserRole,
    ) -> Result<users::Model, DbErr> {
        let user = users::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_name: Set(user_name.to_string()),
            email: Set(email.to_string()),
            role: Set(role),
            is_deleted: Set(false),
            deleted_at: Set(None),
            created_at: Set(Utc::now().into()),
        };

        user.insert(&self.db).await
    }

    /// Returns the user with `email`, creating it if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails.
    pub async fn find_or_create(
        &self,
        user_name: &str,
        email: &str,
        role: UserRole,
    ) -> Result<users::Model, DbErr> {
        match self.find_by_email(email).await? {
            Some(user) => Ok(user),
            None => self.create(user_name, email, role).await,
        }
    }
}
