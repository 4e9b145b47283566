//! Initial database migration.
//!
//! Creates the enums, the users table and the entries table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(ENTRIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE user_role AS ENUM ('admin', 'employee');

CREATE TYPE entry_type AS ENUM ('purchase', 'expense', 'sale');
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_name VARCHAR(100) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    role user_role NOT NULL DEFAULT 'employee',
    is_deleted BOOLEAN NOT NULL DEFAULT false,
    deleted_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_deleted_at CHECK (is_deleted OR deleted_at IS NULL)
);

CREATE INDEX idx_users_email ON users(email) WHERE is_deleted = false;
";

const ENTRIES_SQL: &str = r"
CREATE TABLE entries (
    id BIGSERIAL PRIMARY KEY,
    entry_type entry_type NOT NULL,
    title VARCHAR(200) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    created_by UUID NOT NULL REFERENCES users(id),
    is_admin_edited BOOLEAN NOT NULL DEFAULT false,
    last_modified_at TIMESTAMPTZ,
    last_modified_by UUID REFERENCES users(id),
    CONSTRAINT chk_amount_positive CHECK (amount > 0),
    CONSTRAINT chk_title_present CHECK (length(btrim(title)) > 0)
);

-- Windowed listing and reports
CREATE INDEX idx_entries_created_at ON entries(created_at);

-- Per-user windows
CREATE INDEX idx_entries_creator_created_at ON entries(created_by, created_at);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS entries CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TYPE IF EXISTS entry_type;
DROP TYPE IF EXISTS user_role;
";
