//! Common types used across the application.

pub mod id;

pub use id::*;

#[cfg(test)]
mod id_tests;
