//! Persistence layer for the circulation desk.
//!
//! Books, patrons and transactions are kept in three flat files, one record
//! per line with `;` separated fields. Every save rewrites a whole file
//! through an atomic write (temp file, then rename).
//!
//! # Example
//!
//! ```no_run
//! use circulation_persistence::{CirculationStore, FileStore};
//! use circulation_models::{Book, Genre};
//!
//! let store = FileStore::new("/home/user/.circulation");
//!
//! let books = vec![Book::new("444-555-666", "The Hobbit", "J.R.R. Tolkien", 1937, Genre::Fiction)];
//! store.save_books(&books).unwrap();
//!
//! let snapshot = store.load().unwrap();
//! assert_eq!(snapshot.books.len(), 1);
//! ```

pub mod atomic;
pub mod error;
pub mod memory_store;
pub mod record;
pub mod store;

pub use error::{PersistenceError, Result};
pub use memory_store::MemoryStore;
pub use store::{CirculationStore, FileStore, StoreKind, StoreSnapshot};
