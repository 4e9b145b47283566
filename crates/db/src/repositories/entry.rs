//! Entry repository for database operations.
//!
//! Implements the ledger's `EntryStore` using SeaORM.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, Unchanged,
};
use tracing::error;
use uuid::Uuid;

use crate::entities::{entries, users};
use shopledger_core::ledger::{
    Entry, EntryChanges, EntryOrder, EntryQuery, EntryStore, NewEntry, StoreError,
};
use shopledger_shared::types::{EntryId, UserId};

/// Entry repository implementation.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    db: DatabaseConnection,
}

impl EntryRepository {
    /// Create a new entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl EntryStore for EntryRepository {
    async fn insert(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        let active_model = entries::ActiveModel {
            entry_type: Set(entry.entry_type.into()),
            title: Set(entry.title),
            amount: Set(entry.amount),
            notes: Set(entry.notes),
            created_at: Set(entry.created_at.into()),
            created_by: Set(entry.created_by.into_inner()),
            is_admin_edited: Set(false),
            last_modified_at: Set(None),
            last_modified_by: Set(None),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| backend("insert", &e))?;

        Ok(to_domain(model))
    }

    async fn find(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
        let model = entries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| backend("find", &e))?;

        Ok(model.map(to_domain))
    }

    async fn query_window(&self, query: &EntryQuery) -> Result<Vec<Entry>, StoreError> {
        let mut select = entries::Entity::find()
            .filter(entries::Column::CreatedAt.gte(query.from))
            .filter(entries::Column::CreatedAt.lte(query.to));

        if let Some(user) = query.created_by {
            select = select.filter(entries::Column::CreatedBy.eq(user.into_inner()));
        }
        if query.order == EntryOrder::NewestFirst {
            select = select.order_by_desc(entries::Column::Id);
        }

        let models = select
            .all(&self.db)
            .await
            .map_err(|e| backend("query_window", &e))?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn update(&self, id: EntryId, changes: &EntryChanges) -> Result<(), StoreError> {
        // Unsupplied columns stay NotSet and are left out of the UPDATE.
        let active_model = entries::ActiveModel {
            id: Unchanged(id),
            entry_type: changes.entry_type.map_or(NotSet, |t| Set(t.into())),
            title: changes.title.clone().map_or(NotSet, Set),
            amount: changes.amount.map_or(NotSet, Set),
            notes: changes.notes.clone().map_or(NotSet, Set),
            // The flag is only ever written as true.
            is_admin_edited: if changes.mark_admin_edited { Set(true) } else { NotSet },
            last_modified_at: Set(Some(changes.modified_at.into())),
            last_modified_by: Set(Some(changes.modified_by.into_inner())),
            ..Default::default()
        };

        match active_model.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(StoreError::NotFound(id)),
            Err(e) => Err(backend("update", &e)),
        }
    }

    async fn delete(&self, id: EntryId) -> Result<(), StoreError> {
        let result = entries::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| backend("delete", &e))?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn user_names(&self, ids: &[UserId]) -> Result<HashMap<UserId, String>, StoreError> {
        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| backend("user_names", &e))?;

        Ok(models
            .into_iter()
            .map(|user| (UserId::from_uuid(user.id), user.user_name))
            .collect())
    }
}

fn backend(operation: &str, err: &DbErr) -> StoreError {
    error!(operation, error = %err, "entry store failure");
    StoreError::Backend(err.to_string())
}

/// Convert database model to domain entry.
fn to_domain(model: entries::Model) -> Entry {
    Entry {
        id: model.id,
        entry_type: model.entry_type.into(),
        title: model.title,
        amount: model.amount,
        notes: model.notes,
        created_at: model.created_at.with_timezone(&Utc),
        created_by: UserId::from_uuid(model.created_by),
        is_admin_edited: model.is_admin_edited,
        last_modified_at: model.last_modified_at.map(|at| at.with_timezone(&Utc)),
        last_modified_by: model.last_modified_by.map(UserId::from_uuid),
    }
}
