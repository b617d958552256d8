//! Core data models for the circulation desk.
//!
//! This crate provides the entities the library tracks: books, patrons and
//! the transactions recorded between them.

pub mod book;
pub mod genre;
pub mod patron;
pub mod transaction;

// Re-export main types
pub use book::Book;
pub use genre::Genre;
pub use patron::Patron;
pub use transaction::{Activity, Transaction};
