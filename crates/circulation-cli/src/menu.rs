//! Interactive numbered menu for the circulation desk.

use std::io;

use circulation_core::Library;
use circulation_models::{Book, Genre, Patron};
use circulation_persistence::CirculationStore;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::input::{check_field, date_or_today, parse_int};
use crate::output;

const MENU: &str = "\
Library Menu:
1. List all books
2. Add a book
3. Check out a book
4. Check in a book
5. List patrons with fees
6. Display transactions
7. Add a patron
8. Exit";

const GENRE_PROMPT: &str =
    "Enter Genre (0: Fiction, 1: Non-Fiction, 2: Periodical, 3: Biography, 4: Children): ";

/// Choices offered by the menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuChoice {
    ListBooks,
    AddBook,
    CheckOut,
    CheckIn,
    PatronsWithFees,
    Transactions,
    AddPatron,
    Exit,
    /// Anything that is not a menu number
    Invalid(String),
}

impl MenuChoice {
    /// Parses the user's menu selection.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::ListBooks,
            "2" => MenuChoice::AddBook,
            "3" => MenuChoice::CheckOut,
            "4" => MenuChoice::CheckIn,
            "5" => MenuChoice::PatronsWithFees,
            "6" => MenuChoice::Transactions,
            "7" => MenuChoice::AddPatron,
            "8" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// Menu state
pub struct Menu<S: CirculationStore> {
    editor: DefaultEditor,
    library: Library<S>,
}

impl<S: CirculationStore> Menu<S> {
    /// Creates a new menu around an opened library.
    pub fn new(library: Library<S>) -> RlResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            library,
        })
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> RlResult<()> {
        loop {
            println!("\n{}", MENU);

            let result = self
                .editor
                .readline("Enter your choice: ")
                .and_then(|line| {
                    let choice = MenuChoice::parse(&line);
                    debug!(?choice, "Menu choice");
                    self.handle(choice)
                });

            match result {
                Ok(true) => break,
                Ok(false) => {}
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C abandons the current entry only
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Handles one menu choice. Returns Ok(true) if the user chose to exit.
    fn handle(&mut self, choice: MenuChoice) -> RlResult<bool> {
        let mut stdout = io::stdout();

        match choice {
            MenuChoice::ListBooks => {
                output::write_books(&mut stdout, self.library.books(), OutputFormat::Table)?;
            }

            MenuChoice::AddBook => {
                let isbn = self.prompt_text("Enter ISBN: ", "ISBN")?;
                let title = self.prompt_text("Enter Title: ", "Title")?;
                let author = self.prompt_text("Enter Author: ", "Author")?;
                let year = self.prompt_int("Enter Year: ", "Year")?;
                let genre = self.prompt_int(GENRE_PROMPT, "Genre")?;

                let book = Book::new(isbn, title, author, year, Genre::from_code(genre));
                match self.library.add_book(book) {
                    Ok(()) => println!("Book added."),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }

            MenuChoice::CheckOut => {
                let isbn = self.prompt_text("Enter ISBN of book to check out: ", "ISBN")?;
                let card_number = self.prompt_text("Enter Card Number: ", "Card number")?;
                let date = self.prompt_date()?;

                match self.library.check_out_book(&isbn, &card_number, &date) {
                    Ok(outcome) if outcome.is_success() => println!("{}", outcome),
                    Ok(outcome) => {
                        println!("{}", outcome);
                        println!("Unable to check out the book.");
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }

            MenuChoice::CheckIn => {
                let isbn = self.prompt_text("Enter ISBN of book to check in: ", "ISBN")?;
                let date = self.prompt_date()?;

                match self.library.check_in_book(&isbn, &date) {
                    Ok(outcome) if outcome.is_success() => println!("{}", outcome),
                    Ok(outcome) => {
                        println!("{}", outcome);
                        println!("Unable to check in the book.");
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }

            MenuChoice::PatronsWithFees => {
                let names = self.library.patrons_with_fees();
                output::write_patrons_with_fees(&mut stdout, &names, OutputFormat::Table)?;
            }

            MenuChoice::Transactions => {
                output::write_transactions(
                    &mut stdout,
                    self.library.transactions(),
                    OutputFormat::Table,
                )?;
            }

            MenuChoice::AddPatron => {
                let name = self.prompt_text("Enter Patron Name: ", "Name")?;
                let card_number = self.prompt_text("Enter Card Number: ", "Card number")?;
                let fees = self.prompt_int("Enter Fees: ", "Fees")?;

                match self
                    .library
                    .add_patron(Patron::with_fees(name, card_number, fees))
                {
                    Ok(()) => println!("Patron added."),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }

            MenuChoice::Exit => return Ok(true),

            MenuChoice::Invalid(_) => println!("Invalid choice. Please try again."),
        }

        Ok(false)
    }

    /// Reads a text field, asking again while it holds characters the
    /// stores cannot represent.
    fn prompt_text(&mut self, prompt: &str, name: &str) -> RlResult<String> {
        loop {
            let value = self.editor.readline(prompt)?.trim().to_string();
            match check_field(name, &value) {
                Ok(()) => return Ok(value),
                Err(msg) => println!("{}", msg),
            }
        }
    }

    /// Reads an integer field, asking again until it parses.
    fn prompt_int(&mut self, prompt: &str, name: &str) -> RlResult<i32> {
        loop {
            let value = self.editor.readline(prompt)?;
            match parse_int(name, &value) {
                Ok(n) => return Ok(n),
                Err(msg) => println!("{}", msg),
            }
        }
    }

    /// Reads a date; an empty answer means today.
    fn prompt_date(&mut self) -> RlResult<String> {
        let date = self.prompt_text("Enter Date (blank for today): ", "Date")?;
        Ok(date_or_today(Some(&date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_numbers() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::ListBooks);
        assert_eq!(MenuChoice::parse("2"), MenuChoice::AddBook);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::CheckOut);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::CheckIn);
        assert_eq!(MenuChoice::parse("5"), MenuChoice::PatronsWithFees);
        assert_eq!(MenuChoice::parse("6"), MenuChoice::Transactions);
        assert_eq!(MenuChoice::parse("7"), MenuChoice::AddPatron);
        assert_eq!(MenuChoice::parse("8"), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuChoice::parse("  3 \n"), MenuChoice::CheckOut);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Invalid("9".to_string()));
        assert_eq!(MenuChoice::parse("list"), MenuChoice::Invalid("list".to_string()));
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid(String::new()));
    }

    #[test]
    fn test_menu_lists_every_choice() {
        for n in 1..=8 {
            assert!(MENU.contains(&format!("{}. ", n)));
        }
        assert!(MENU.ends_with("8. Exit"));
    }
}
