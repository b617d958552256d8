//! Line codec for the flat store files.
//!
//! ```text
//! books.txt         isbn;title;author;copyrightYear;genreCode;checkedOut
//! patrons.txt       userName;cardNumber;owedFees
//! transactions.txt  bookIsbn;patronCardNumber;activity;date
//! ```
//!
//! Fields are not escaped, so values must not contain `;` or line breaks.

use std::fmt::Write as _;

use circulation_models::{Activity, Book, Genre, Patron, Transaction};
use tracing::warn;

use crate::error::{PersistenceError, Result};
use crate::store::StoreKind;

const SEPARATOR: char = ';';

/// Encodes the full book collection, one line per book.
pub fn encode_books(books: &[Book]) -> String {
    let mut out = String::new();
    for book in books {
        let _ = writeln!(
            out,
            "{};{};{};{};{};{}",
            book.isbn(),
            book.title(),
            book.author(),
            book.copyright_year(),
            book.genre().code(),
            u8::from(book.is_checked_out())
        );
    }
    out
}

/// Encodes the full patron collection.
pub fn encode_patrons(patrons: &[Patron]) -> String {
    let mut out = String::new();
    for patron in patrons {
        let _ = writeln!(
            out,
            "{};{};{}",
            patron.user_name(),
            patron.card_number(),
            patron.owed_fees()
        );
    }
    out
}

/// Encodes the transaction log. Only the book ISBN and patron card number
/// of each snapshot are stored.
pub fn encode_transactions(transactions: &[Transaction]) -> String {
    let mut out = String::new();
    for transaction in transactions {
        let _ = writeln!(
            out,
            "{};{};{};{}",
            transaction.book().isbn(),
            transaction.patron().card_number(),
            transaction.activity(),
            transaction.date()
        );
    }
    out
}

pub fn decode_books(text: &str) -> Result<Vec<Book>> {
    records(text, StoreKind::Books, 6)
        .map(|record| {
            let (line, fields) = record?;
            let bad_field = |reason: String| invalid(StoreKind::Books, line, reason);

            let year = parse_int(fields[3]).map_err(bad_field)?;
            let genre = parse_int(fields[4]).map_err(bad_field)?;
            let checked_out = parse_bool(fields[5]).map_err(bad_field)?;

            Ok(
                Book::new(fields[0], fields[1], fields[2], year, Genre::from_code(genre))
                    .with_checked_out(checked_out),
            )
        })
        .collect()
}

pub fn decode_patrons(text: &str) -> Result<Vec<Patron>> {
    records(text, StoreKind::Patrons, 3)
        .map(|record| {
            let (line, fields) = record?;
            let fees = parse_int(fields[2]).map_err(|r| invalid(StoreKind::Patrons, line, r))?;
            Ok(Patron::with_fees(fields[0], fields[1], fees))
        })
        .collect()
}

/// Decodes the transaction log against already loaded books and patrons.
///
/// Snapshots are rebuilt from the first book and patron matching the stored
/// keys. Entries whose book or patron no longer exists are skipped.
pub fn decode_transactions(
    text: &str,
    books: &[Book],
    patrons: &[Patron],
) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();

    for record in records(text, StoreKind::Transactions, 4) {
        let (line, fields) = record?;
        let activity: Activity = fields[2]
            .parse()
            .map_err(|r| invalid(StoreKind::Transactions, line, r))?;

        let book = books.iter().find(|b| b.isbn() == fields[0]);
        let patron = patrons.iter().find(|p| p.card_number() == fields[1]);

        match (book, patron) {
            (Some(book), Some(patron)) => transactions.push(Transaction::new(
                book.clone(),
                patron.clone(),
                activity,
                fields[3],
            )),
            _ => {
                warn!(
                    line,
                    isbn = fields[0],
                    card_number = fields[1],
                    "Skipping transaction that references an unknown book or patron"
                );
            }
        }
    }

    Ok(transactions)
}

/// Splits non-empty lines into exactly `arity` fields, yielding 1-based
/// line numbers alongside.
fn records(
    text: &str,
    kind: StoreKind,
    arity: usize,
) -> impl Iterator<Item = Result<(usize, Vec<&str>)>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty())
        .map(move |(line, content)| {
            let fields: Vec<&str> = content.split(SEPARATOR).collect();
            if fields.len() == arity {
                Ok((line, fields))
            } else {
                Err(invalid(
                    kind,
                    line,
                    format!("expected {} fields, found {}", arity, fields.len()),
                ))
            }
        })
}

fn parse_int(field: &str) -> std::result::Result<i32, String> {
    field
        .trim()
        .parse()
        .map_err(|_| format!("not an integer: {:?}", field))
}

fn parse_bool(field: &str) -> std::result::Result<bool, String> {
    match field.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(format!("not a boolean: {:?}", other)),
    }
}

fn invalid(kind: StoreKind, line: usize, reason: String) -> PersistenceError {
    PersistenceError::InvalidRecord { kind, line, reason }
}
