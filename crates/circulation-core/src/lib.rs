//! Circulation core for the library desk.
//!
//! The [`Library`] owns the catalogue, the patron register and the
//! transaction log. It decides when a book may be checked out or in and
//! rewrites the affected stores after every change.
//!
//! # Example
//!
//! ```no_run
//! use circulation_core::Library;
//! use circulation_persistence::FileStore;
//!
//! let mut library = Library::open(FileStore::new("/home/user/.circulation")).unwrap();
//! if library.is_empty() {
//!     library.seed_defaults().unwrap();
//! }
//!
//! let outcome = library.check_out_book("111-222-333", "123", "2024-01-01").unwrap();
//! println!("{}", outcome);
//! ```

pub mod config;
pub mod error;
pub mod library;
pub mod outcome;
pub mod seed;

pub use error::{LibraryError, Result};
pub use library::Library;
pub use outcome::{CheckInOutcome, CheckOutOutcome};
