//! Store writer abstraction and the file-backed implementation.

use std::fmt;
use std::path::{Path, PathBuf};

use circulation_models::{Book, Patron, Transaction};
use tracing::debug;

use crate::atomic::{atomic_write, read_optional};
use crate::error::Result;
use crate::record;

/// The three independent stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Books,
    Patrons,
    Transactions,
}

impl StoreKind {
    /// File name of the store inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreKind::Books => "books.txt",
            StoreKind::Patrons => "patrons.txt",
            StoreKind::Transactions => "transactions.txt",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Books => write!(f, "book"),
            StoreKind::Patrons => write!(f, "patron"),
            StoreKind::Transactions => write!(f, "transaction"),
        }
    }
}

/// Everything read back from the stores at startup.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub books: Vec<Book>,
    pub patrons: Vec<Patron>,
    pub transactions: Vec<Transaction>,
}

impl StoreSnapshot {
    /// Returns true if no store held any record.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.patrons.is_empty() && self.transactions.is_empty()
    }
}

/// Destination for the library's collections.
///
/// Every save replaces the whole store with the given collection.
pub trait CirculationStore {
    /// Rewrites the book store.
    fn save_books(&self, books: &[Book]) -> Result<()>;

    /// Rewrites the patron store.
    fn save_patrons(&self, patrons: &[Patron]) -> Result<()>;

    /// Rewrites the transaction store.
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;

    /// Reads all three stores. Missing stores load as empty collections.
    fn load(&self) -> Result<StoreSnapshot>;
}

/// Stores the collections as flat files in a data directory:
/// ```text
/// data_dir/
/// ├── books.txt
/// ├── patrons.txt
/// └── transactions.txt
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a new FileStore rooted at `dir`. Nothing is touched on disk
    /// until the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of one store file.
    pub fn path(&self, kind: StoreKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    fn write(&self, kind: StoreKind, text: String, count: usize) -> Result<()> {
        let path = self.path(kind);
        atomic_write(&path, text.as_bytes())?;
        debug!(store = %kind, records = count, path = %path.display(), "Store rewritten");
        Ok(())
    }
}

impl CirculationStore for FileStore {
    fn save_books(&self, books: &[Book]) -> Result<()> {
        self.write(StoreKind::Books, record::encode_books(books), books.len())
    }

    fn save_patrons(&self, patrons: &[Patron]) -> Result<()> {
        self.write(StoreKind::Patrons, record::encode_patrons(patrons), patrons.len())
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.write(
            StoreKind::Transactions,
            record::encode_transactions(transactions),
            transactions.len(),
        )
    }

    fn load(&self) -> Result<StoreSnapshot> {
        let read = |kind| read_optional(&self.path(kind)).map(Option::unwrap_or_default);

        let books = record::decode_books(&read(StoreKind::Books)?)?;
        let patrons = record::decode_patrons(&read(StoreKind::Patrons)?)?;
        let transactions =
            record::decode_transactions(&read(StoreKind::Transactions)?, &books, &patrons)?;

        debug!(
            books = books.len(),
            patrons = patrons.len(),
            transactions = transactions.len(),
            dir = %self.dir.display(),
            "Stores loaded"
        );

        Ok(StoreSnapshot {
            books,
            patrons,
            transactions,
        })
    }
}
