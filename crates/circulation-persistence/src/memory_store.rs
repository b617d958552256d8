//! In-memory store for tests and dry runs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use circulation_models::{Book, Patron, Transaction};

use crate::error::Result;
use crate::record;
use crate::store::{CirculationStore, StoreKind, StoreSnapshot};

#[derive(Debug, Default)]
struct Contents {
    texts: HashMap<StoreKind, String>,
    writes: Vec<StoreKind>,
}

/// Keeps the encoded store text in memory instead of on disk.
///
/// Clones share the same contents, so a test can hand one clone to a
/// library and inspect what was written through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Contents>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current text of a store, empty if never written.
    pub fn text(&self, kind: StoreKind) -> String {
        self.inner
            .borrow()
            .texts
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns every write performed so far, in order.
    pub fn writes(&self) -> Vec<StoreKind> {
        self.inner.borrow().writes.clone()
    }

    fn put(&self, kind: StoreKind, text: String) {
        let mut inner = self.inner.borrow_mut();
        inner.texts.insert(kind, text);
        inner.writes.push(kind);
    }
}

impl CirculationStore for MemoryStore {
    fn save_books(&self, books: &[Book]) -> Result<()> {
        self.put(StoreKind::Books, record::encode_books(books));
        Ok(())
    }

    fn save_patrons(&self, patrons: &[Patron]) -> Result<()> {
        self.put(StoreKind::Patrons, record::encode_patrons(patrons));
        Ok(())
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.put(
            StoreKind::Transactions,
            record::encode_transactions(transactions),
        );
        Ok(())
    }

    fn load(&self) -> Result<StoreSnapshot> {
        let books = record::decode_books(&self.text(StoreKind::Books))?;
        let patrons = record::decode_patrons(&self.text(StoreKind::Patrons))?;
        let transactions =
            record::decode_transactions(&self.text(StoreKind::Transactions), &books, &patrons)?;

        Ok(StoreSnapshot {
            books,
            patrons,
            transactions,
        })
    }
}
