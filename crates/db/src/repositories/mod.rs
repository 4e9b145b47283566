//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod entry;
pub mod user;

pub use entry::EntryRepository;
pub use user::UserRepository;
