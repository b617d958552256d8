//! Default catalogue installed into an empty data directory.

use circulation_models::{Book, Genre, Patron};

pub fn default_books() -> Vec<Book> {
    vec![
        Book::new(
            "111-222-333",
            "The C++ Programming Language",
            "Bjarne Stroustrup",
            2013,
            Genre::NonFiction,
        ),
        Book::new("444-555-666", "The Hobbit", "J.R.R. Tolkien", 1937, Genre::Fiction),
    ]
}

/// Includes two patrons sharing card 456, both owing fees.
pub fn default_patrons() -> Vec<Patron> {
    vec![
        Patron::new("Alice", "123"),
        Patron::with_fees("Bob", "456", 50),
        Patron::with_fees("Walmond", "456", 200),
    ]
}
