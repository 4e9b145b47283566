//! `SeaORM` entity definitions.

pub mod entries;
pub mod sea_orm_active_enums;
pub mod users;
