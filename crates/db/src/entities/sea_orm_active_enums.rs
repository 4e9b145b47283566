//! Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_type")]
pub enum EntryType {
    #[sea_orm(string_value = "purchase")]
    Purchase,
    #[sea_orm(string_value = "expense")]
    Expense,
    #[sea_orm(string_value = "sale")]
    Sale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "employee")]
    Employee,
}

impl From<shopledger_core::ledger::EntryType> for EntryType {
    fn from(value: shopledger_core::ledger::EntryType) -> Self {
        use shopledger_core::ledger::EntryType as Domain;
        match value {
            Domain::Purchase => Self::Purchase,
            Domain::Expense => Self::Expense,
            Domain::Sale => Self::Sale,
        }
    }
}

impl From<EntryType> for shopledger_core::ledger::EntryType {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::Purchase => Self::Purchase,
            EntryType::Expense => Self::Expense,
            EntryType::Sale => Self::Sale,
        }
    }
}

impl UserRole {
    /// Role name as carried in access token claims.
    #[must_use]
    pub const fn claim_name(self) -> &'static str {
        match self {
            Self::Admin => shopledger_shared::auth::ADMIN_ROLE,
            Self::Employee => shopledger_shared::auth::EMPLOYEE_ROLE,
        }
    }
}
