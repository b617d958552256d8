//! Results of checkout and check-in requests.

use std::fmt;

/// Result of a checkout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutOutcome {
    /// The book is now checked out and a transaction was recorded.
    CheckedOut,
    /// No book has the ISBN, or it is already checked out.
    BookUnavailable,
    /// No patron has the card number, or the patron owes fees.
    PatronIneligible,
}

impl CheckOutOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutOutcome::CheckedOut)
    }
}

impl fmt::Display for CheckOutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutOutcome::CheckedOut => write!(f, "Book checked out successfully."),
            CheckOutOutcome::BookUnavailable => {
                write!(f, "Book not available for checkout or does not exist.")
            }
            CheckOutOutcome::PatronIneligible => write!(f, "Patron does not exist or owes fees."),
        }
    }
}

impl From<CheckOutOutcome> for bool {
    fn from(outcome: CheckOutOutcome) -> Self {
        outcome.is_success()
    }
}

/// Result of a check-in request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// The book is back on the shelf.
    CheckedIn,
    /// No book has the ISBN, or it is not checked out.
    NotCheckedOut,
}

impl CheckInOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckInOutcome::CheckedIn)
    }
}

impl fmt::Display for CheckInOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckInOutcome::CheckedIn => write!(f, "Book checked in successfully."),
            CheckInOutcome::NotCheckedOut => write!(f, "Book not checked out or does not exist."),
        }
    }
}

impl From<CheckInOutcome> for bool {
    fn from(outcome: CheckInOutcome) -> Self {
        outcome.is_success()
    }
}
