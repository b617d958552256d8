//! Rendering of library listings.

use std::io::{self, Write};

use circulation_models::{Book, Patron, Transaction};
use serde::Serialize;

use crate::cli::OutputFormat;

pub fn write_books<'a, W: Write>(
    out: &mut W,
    books: impl Iterator<Item = &'a Book>,
    format: OutputFormat,
) -> io::Result<()> {
    let books: Vec<&Book> = books.collect();
    match format {
        OutputFormat::Json => write_json(out, &books),
        OutputFormat::Table => {
            if books.is_empty() {
                writeln!(out, "No books to display.")?;
            }
            for book in books {
                writeln!(out, "{}", book)?;
            }
            Ok(())
        }
    }
}

/// Writes the transaction log, or a notice when it is empty.
pub fn write_transactions<'a, W: Write>(
    out: &mut W,
    transactions: impl Iterator<Item = &'a Transaction>,
    format: OutputFormat,
) -> io::Result<()> {
    let transactions: Vec<&Transaction> = transactions.collect();
    match format {
        OutputFormat::Json => write_json(out, &transactions),
        OutputFormat::Table => {
            if transactions.is_empty() {
                writeln!(out, "No transactions to display.")?;
            }
            for transaction in transactions {
                writeln!(out, "{}", transaction)?;
            }
            Ok(())
        }
    }
}

pub fn write_patrons<'a, W: Write>(
    out: &mut W,
    patrons: impl Iterator<Item = &'a Patron>,
    format: OutputFormat,
) -> io::Result<()> {
    let patrons: Vec<&Patron> = patrons.collect();
    match format {
        OutputFormat::Json => write_json(out, &patrons),
        OutputFormat::Table => {
            if patrons.is_empty() {
                writeln!(out, "No patrons registered.")?;
                return Ok(());
            }
            writeln!(out, "{:<24} {:<12} {:>8}", "NAME", "CARD", "FEES")?;
            for patron in patrons {
                writeln!(
                    out,
                    "{:<24} {:<12} {:>8}",
                    patron.user_name(),
                    patron.card_number(),
                    patron.owed_fees()
                )?;
            }
            Ok(())
        }
    }
}

pub fn write_patrons_with_fees<W: Write>(
    out: &mut W,
    names: &[String],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &names),
        OutputFormat::Table => {
            writeln!(out, "Patrons with fees: ")?;
            for name in names {
                writeln!(out, "{}", name)?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use circulation_models::{Activity, Genre};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn hobbit() -> Book {
        Book::new("444-555-666", "The Hobbit", "J.R.R. Tolkien", 1937, Genre::Fiction)
    }

    #[test]
    fn test_books_table() {
        let books = vec![hobbit()];
        let text = render(|out| write_books(out, books.iter(), OutputFormat::Table));
        assert_eq!(
            text,
            "Title: The Hobbit\nAuthor: J.R.R. Tolkien\nISBN: 444-555-666\nGenre: Fiction\n\n"
        );
    }

    #[test]
    fn test_books_json() {
        let books = vec![hobbit()];
        let text = render(|out| write_books(out, books.iter(), OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["isbn"], "444-555-666");
        assert_eq!(value[0]["checked_out"], false);
    }

    #[test]
    fn test_empty_transactions_notice() {
        let text = render(|out| write_transactions(out, std::iter::empty(), OutputFormat::Table));
        assert_eq!(text, "No transactions to display.\n");
    }

    #[test]
    fn test_transactions_table() {
        let log = vec![Transaction::new(
            hobbit(),
            Patron::new("Alice", "123"),
            Activity::CheckOut,
            "2024-01-01",
        )];
        let text = render(|out| write_transactions(out, log.iter(), OutputFormat::Table));
        assert!(text.starts_with("Transaction:\nBook: The Hobbit\nPatron: Alice\n"));
        assert!(text.contains("Activity: Check Out\nDate: 2024-01-01\n"));
    }

    #[test]
    fn test_patrons_with_fees_header() {
        let names = vec!["Bob".to_string(), "Walmond".to_string()];
        let text = render(|out| write_patrons_with_fees(out, &names, OutputFormat::Table));
        assert_eq!(text, "Patrons with fees: \nBob\nWalmond\n");
    }

    #[test]
    fn test_patrons_table_columns() {
        let patrons = vec![Patron::with_fees("Bob", "456", 50)];
        let text = render(|out| write_patrons(out, patrons.iter(), OutputFormat::Table));
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("Bob"));
        assert!(lines[1].ends_with("50"));
    }
}
