//! Command handlers for CLI subcommands.

use std::io::Write;
use std::path::Path;

use circulation_core::Library;
use circulation_models::{Book, Genre, Patron};
use circulation_persistence::{CirculationStore, FileStore};
use tracing::info;

use crate::cli::Commands;
use crate::input::{check_field, date_or_today};
use crate::output;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Opens the library stored in `data_dir`, installing the default catalogue
/// when the directory holds no records and `seed` is set.
pub fn open_library(data_dir: &Path, seed: bool) -> Result<Library<FileStore>> {
    let mut library = Library::open(FileStore::new(data_dir))?;

    if seed && library.is_empty() {
        info!(data_dir = %data_dir.display(), "Empty data directory, installing default catalogue");
        library.seed_defaults()?;
    }

    Ok(library)
}

/// Execute a one-shot CLI command. `Menu` is handled by the caller.
pub fn execute<S, W>(command: Commands, library: &mut Library<S>, out: &mut W) -> Result<()>
where
    S: CirculationStore,
    W: Write,
{
    match command {
        Commands::Menu => Ok(()),
        Commands::Books { format } => Ok(output::write_books(out, library.books(), format)?),
        Commands::Patrons { with_fees, format } => {
            if with_fees {
                output::write_patrons_with_fees(out, &library.patrons_with_fees(), format)?;
            } else {
                output::write_patrons(out, library.patrons(), format)?;
            }
            Ok(())
        }
        Commands::Transactions { format } => {
            Ok(output::write_transactions(out, library.transactions(), format)?)
        }
        Commands::AddBook {
            isbn,
            title,
            author,
            year,
            genre,
        } => {
            check_field("ISBN", &isbn)?;
            check_field("Title", &title)?;
            check_field("Author", &author)?;

            library.add_book(Book::new(isbn, title, author, year, Genre::from_code(genre)))?;
            writeln!(out, "Book added.")?;
            Ok(())
        }
        Commands::AddPatron {
            name,
            card_number,
            fees,
        } => {
            check_field("Name", &name)?;
            check_field("Card number", &card_number)?;

            library.add_patron(Patron::with_fees(name, card_number, fees))?;
            writeln!(out, "Patron added.")?;
            Ok(())
        }
        Commands::CheckOut {
            isbn,
            card_number,
            date,
        } => {
            let date = date_or_today(date.as_deref());
            check_field("Date", &date)?;

            let outcome = library.check_out_book(&isbn, &card_number, &date)?;
            writeln!(out, "{}", outcome)?;
            if outcome.is_success() {
                Ok(())
            } else {
                Err("Unable to check out the book.".into())
            }
        }
        Commands::CheckIn { isbn, date } => {
            let date = date_or_today(date.as_deref());

            let outcome = library.check_in_book(&isbn, &date)?;
            writeln!(out, "{}", outcome)?;
            if outcome.is_success() {
                Ok(())
            } else {
                Err("Unable to check in the book.".into())
            }
        }
        Commands::SetFees { card_number, fees } => {
            if library.set_patron_fees(&card_number, fees)? {
                writeln!(out, "Fees for card {} set to {}.", card_number, fees)?;
                Ok(())
            } else {
                Err(format!("No patron with card number {}", card_number).into())
            }
        }
    }
}
