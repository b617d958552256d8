//! Book type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::genre::Genre;

/// A book in the library's catalogue.
///
/// Bibliographic fields are fixed at construction. Only the checked-out
/// flag changes, and the library is responsible for deciding when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    copyright_year: i32,
    genre: Genre,
    #[serde(default)]
    checked_out: bool,
}

impl Book {
    /// Creates a new book that is not checked out.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        copyright_year: i32,
        genre: Genre,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            copyright_year,
            genre,
            checked_out: false,
        }
    }

    /// Sets the checked-out flag, used when restoring a persisted record.
    pub fn with_checked_out(mut self, checked_out: bool) -> Self {
        self.checked_out = checked_out;
        self
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn copyright_year(&self) -> i32 {
        self.copyright_year
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn is_checked_out(&self) -> bool {
        self.checked_out
    }

    /// Marks the book as checked out. Availability is not checked here.
    pub fn check_out(&mut self) {
        self.checked_out = true;
    }

    /// Marks the book as checked in.
    pub fn check_in(&mut self) {
        self.checked_out = false;
    }
}

/// Books are identified by ISBN alone.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        writeln!(f, "Genre: {}", self.genre)
    }
}
