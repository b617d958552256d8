//! Circulation transaction records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::book::Book;
use crate::patron::Patron;

/// Kind of circulation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "Check Out")]
    CheckOut,
    #[serde(rename = "Check In")]
    CheckIn,
}

impl Activity {
    /// Returns the label used both for display and in the transaction store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::CheckOut => "Check Out",
            Activity::CheckIn => "Check In",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Check Out" => Ok(Activity::CheckOut),
            "Check In" => Ok(Activity::CheckIn),
            other => Err(format!("unknown activity: {}", other)),
        }
    }
}

/// An immutable log entry for one checkout or check-in.
///
/// The book and patron are copies taken when the event happened, so later
/// changes to the catalogue do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    book: Book,
    patron: Patron,
    activity: Activity,
    date: String,
}

impl Transaction {
    pub fn new(book: Book, patron: Patron, activity: Activity, date: impl Into<String>) -> Self {
        Self {
            book,
            patron,
            activity,
            date: date.into(),
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn patron(&self) -> &Patron {
        &self.patron
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transaction:")?;
        writeln!(f, "Book: {}", self.book.title())?;
        writeln!(f, "Patron: {}", self.patron.user_name())?;
        writeln!(f, "Activity: {}", self.activity)?;
        writeln!(f, "Date: {}", self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::Genre;

    fn sample() -> Transaction {
        let mut book = Book::new(
            "111-222-333",
            "The C++ Programming Language",
            "Bjarne Stroustrup",
            2013,
            Genre::NonFiction,
        );
        book.check_out();
        Transaction::new(book, Patron::new("Alice", "123"), Activity::CheckOut, "2024-01-01")
    }

    #[test]
    fn test_activity_labels() {
        assert_eq!(Activity::CheckOut.to_string(), "Check Out");
        assert_eq!(Activity::CheckIn.to_string(), "Check In");
        assert_eq!("Check In".parse::<Activity>(), Ok(Activity::CheckIn));
        assert!("checkout".parse::<Activity>().is_err());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let transaction = sample();
        let mut book = transaction.book().clone();
        book.check_in();

        assert!(transaction.book().is_checked_out());
    }

    #[test]
    fn test_display_block() {
        assert_eq!(
            sample().to_string(),
            "Transaction:\nBook: The C++ Programming Language\nPatron: Alice\nActivity: Check Out\nDate: 2024-01-01\n"
        );
    }

    #[test]
    fn test_activity_serializes_as_label() {
        let json = serde_json::to_string(&Activity::CheckOut).unwrap();
        assert_eq!(json, "\"Check Out\"");
    }
}
