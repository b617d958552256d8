//! Library - the circulation state machine.
//!
//! Holds the three collections in insertion order and writes the affected
//! store(s) after every mutation:
//!
//! | operation          | stores rewritten           |
//! |--------------------|----------------------------|
//! | `add_book`         | books                      |
//! | `add_patron`       | patrons                    |
//! | `check_out_book`   | transactions, then books   |
//! | `check_in_book`    | books                      |
//! | `set_patron_fees`  | patrons                    |
//!
//! Lookups are linear scans and the first match wins, so when ISBNs or card
//! numbers are duplicated only the earliest record is ever affected.
//!
//! If a store write fails the in-memory change is undone before the error
//! is returned, keeping memory equal to what was last written.

use std::slice;

use circulation_models::{Activity, Book, Patron, Transaction};
use circulation_persistence::CirculationStore;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::outcome::{CheckInOutcome, CheckOutOutcome};
use crate::seed;

/// Books, patrons and the transaction log, persisted through `S`.
#[derive(Debug)]
pub struct Library<S: CirculationStore> {
    books: Vec<Book>,
    patrons: Vec<Patron>,
    transactions: Vec<Transaction>,
    store: S,
}

impl<S: CirculationStore> Library<S> {
    /// Creates an empty library. Nothing is written until the first change.
    pub fn new(store: S) -> Self {
        Self {
            books: Vec::new(),
            patrons: Vec::new(),
            transactions: Vec::new(),
            store,
        }
    }

    /// Creates a library from whatever the store already holds.
    pub fn open(store: S) -> Result<Self> {
        let snapshot = store.load()?;
        info!(
            books = snapshot.books.len(),
            patrons = snapshot.patrons.len(),
            transactions = snapshot.transactions.len(),
            "Library opened"
        );

        Ok(Self {
            books: snapshot.books,
            patrons: snapshot.patrons,
            transactions: snapshot.transactions,
            store,
        })
    }

    /// Adds the default catalogue and patrons through the regular
    /// add operations.
    pub fn seed_defaults(&mut self) -> Result<()> {
        for book in seed::default_books() {
            self.add_book(book)?;
        }
        for patron in seed::default_patrons() {
            self.add_patron(patron)?;
        }
        info!("Seeded default catalogue");
        Ok(())
    }

    /// Returns the store the library writes to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns true if the library holds no books, patrons or transactions.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.patrons.is_empty() && self.transactions.is_empty()
    }

    /// Appends a book and rewrites the book store. Duplicate ISBNs are
    /// accepted.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        info!(isbn = %book.isbn(), title = %book.title(), "Adding book");
        self.books.push(book);

        if let Err(e) = self.store.save_books(&self.books) {
            self.books.pop();
            return Err(e.into());
        }
        Ok(())
    }

    /// Appends a patron and rewrites the patron store. Duplicate card
    /// numbers are accepted.
    pub fn add_patron(&mut self, patron: Patron) -> Result<()> {
        info!(card_number = %patron.card_number(), "Adding patron");
        self.patrons.push(patron);

        if let Err(e) = self.store.save_patrons(&self.patrons) {
            self.patrons.pop();
            return Err(e.into());
        }
        Ok(())
    }

    /// Lends the book with `isbn` to the patron holding `card_number`.
    ///
    /// The book must exist and be on the shelf, and the patron must exist
    /// and owe no fees. On success a `CheckOut` transaction is appended and
    /// the transaction and book stores are rewritten, in that order.
    pub fn check_out_book(
        &mut self,
        isbn: &str,
        card_number: &str,
        date: &str,
    ) -> Result<CheckOutOutcome> {
        let Some(book_index) = self
            .book_position(isbn)
            .filter(|&i| !self.books[i].is_checked_out())
        else {
            info!(isbn = %isbn, "Checkout refused: book not available");
            return Ok(CheckOutOutcome::BookUnavailable);
        };

        let Some(patron_index) = self
            .patron_position(card_number)
            .filter(|&i| !self.patrons[i].owes_fees())
        else {
            info!(card_number = %card_number, "Checkout refused: patron missing or owes fees");
            return Ok(CheckOutOutcome::PatronIneligible);
        };

        self.books[book_index].check_out();
        self.transactions.push(Transaction::new(
            self.books[book_index].clone(),
            self.patrons[patron_index].clone(),
            Activity::CheckOut,
            date,
        ));

        if let Err(e) = self.store.save_transactions(&self.transactions) {
            self.undo_checkout(book_index);
            return Err(e.into());
        }

        if let Err(e) = self.store.save_books(&self.books) {
            self.undo_checkout(book_index);
            // The transaction store already holds the new entry
            if let Err(restore) = self.store.save_transactions(&self.transactions) {
                error!(
                    error = %restore,
                    "Failed to restore transaction store after book store write failed"
                );
            }
            return Err(e.into());
        }

        info!(isbn = %isbn, card_number = %card_number, date = %date, "Book checked out");
        Ok(CheckOutOutcome::CheckedOut)
    }

    /// Returns the book with `isbn` to the shelf and rewrites the book
    /// store. No transaction is recorded.
    pub fn check_in_book(&mut self, isbn: &str, date: &str) -> Result<CheckInOutcome> {
        let Some(book_index) = self
            .book_position(isbn)
            .filter(|&i| self.books[i].is_checked_out())
        else {
            info!(isbn = %isbn, "Check-in refused: book not checked out or missing");
            return Ok(CheckInOutcome::NotCheckedOut);
        };

        self.books[book_index].check_in();

        if let Err(e) = self.store.save_books(&self.books) {
            self.books[book_index].check_out();
            return Err(e.into());
        }

        info!(isbn = %isbn, date = %date, "Book checked in");
        Ok(CheckInOutcome::CheckedIn)
    }

    /// Overwrites the fee balance of the first patron with `card_number`.
    ///
    /// Returns `false` without writing anything if no patron has the card.
    pub fn set_patron_fees(&mut self, card_number: &str, fees: i32) -> Result<bool> {
        let Some(index) = self.patron_position(card_number) else {
            info!(card_number = %card_number, "Fee update refused: unknown card");
            return Ok(false);
        };

        let previous = self.patrons[index].owed_fees();
        self.patrons[index].set_owed_fees(fees);

        if let Err(e) = self.store.save_patrons(&self.patrons) {
            self.patrons[index].set_owed_fees(previous);
            return Err(e.into());
        }

        info!(card_number = %card_number, previous, fees, "Patron fees updated");
        Ok(true)
    }

    /// Names of patrons with a positive balance, in registration order.
    pub fn patrons_with_fees(&self) -> Vec<String> {
        self.patrons
            .iter()
            .filter(|p| p.owes_fees())
            .map(|p| p.user_name().to_string())
            .collect()
    }

    /// Books in insertion order. The iterator can be cloned to restart.
    pub fn books(&self) -> slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Patrons in registration order.
    pub fn patrons(&self) -> slice::Iter<'_, Patron> {
        self.patrons.iter()
    }

    /// Transactions in the order they happened. Empty when nothing has been
    /// checked out yet.
    pub fn transactions(&self) -> slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// First book with `isbn`.
    pub fn find_book(&self, isbn: &str) -> Option<&Book> {
        self.book_position(isbn).map(|i| &self.books[i])
    }

    /// First patron with `card_number`.
    pub fn find_patron(&self, card_number: &str) -> Option<&Patron> {
        self.patron_position(card_number).map(|i| &self.patrons[i])
    }

    fn book_position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.isbn() == isbn)
    }

    fn patron_position(&self, card_number: &str) -> Option<usize> {
        self.patrons.iter().position(|p| p.card_number() == card_number)
    }

    fn undo_checkout(&mut self, book_index: usize) {
        debug!(book_index, "Rolling back checkout");
        self.transactions.pop();
        self.books[book_index].check_in();
    }
}
