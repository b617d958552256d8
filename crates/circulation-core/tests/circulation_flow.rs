//! End-to-end circulation against the file store.

use std::fs;

use circulation_core::{CheckInOutcome, CheckOutOutcome, Library};
use circulation_models::{Book, Genre, Patron};
use circulation_persistence::{FileStore, StoreKind};
use tempfile::tempdir;

fn read(store: &FileStore, kind: StoreKind) -> String {
    fs::read_to_string(store.path(kind)).unwrap_or_default()
}

#[test]
fn test_seeded_desk_round_trip() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let mut library = Library::open(store.clone()).unwrap();
    assert!(library.is_empty());
    library.seed_defaults().unwrap();

    assert_eq!(
        read(&store, StoreKind::Books),
        "111-222-333;The C++ Programming Language;Bjarne Stroustrup;2013;1;0\n\
         444-555-666;The Hobbit;J.R.R. Tolkien;1937;0;0\n"
    );
    assert_eq!(
        read(&store, StoreKind::Patrons),
        "Alice;123;0\nBob;456;50\nWalmond;456;200\n"
    );
    assert_eq!(read(&store, StoreKind::Transactions), "");

    let outcome = library
        .check_out_book("111-222-333", "123", "2024-01-01")
        .unwrap();
    assert_eq!(outcome, CheckOutOutcome::CheckedOut);

    let refused = library
        .check_out_book("444-555-666", "456", "2024-01-01")
        .unwrap();
    assert_eq!(refused, CheckOutOutcome::PatronIneligible);

    let not_out = library.check_in_book("444-555-666", "2024-01-02").unwrap();
    assert_eq!(not_out, CheckInOutcome::NotCheckedOut);

    assert_eq!(
        read(&store, StoreKind::Transactions),
        "111-222-333;123;Check Out;2024-01-01\n"
    );
    assert!(read(&store, StoreKind::Books).contains("2013;1;1\n"));

    // A second process sees the same state
    let reopened = Library::open(FileStore::new(dir.path())).unwrap();
    assert!(reopened.find_book("111-222-333").unwrap().is_checked_out());
    assert!(!reopened.find_book("444-555-666").unwrap().is_checked_out());
    assert_eq!(reopened.transactions().count(), 1);
    assert_eq!(reopened.patrons_with_fees(), vec!["Bob", "Walmond"]);
}

#[test]
fn test_added_records_reconstruct_from_disk() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let mut library = Library::new(store.clone());

    let book = Book::new("978-0", "Matilda", "Roald Dahl", 1988, Genre::Children);
    library.add_book(book.clone()).unwrap();
    library.add_patron(Patron::with_fees("Frank", "321", 12)).unwrap();

    let reopened = Library::open(store).unwrap();
    let loaded: Vec<_> = reopened.books().collect();

    assert_eq!(loaded.len(), 1);
    assert_eq!(*loaded[0], book);
    assert_eq!(loaded[0].title(), "Matilda");
    assert_eq!(loaded[0].author(), "Roald Dahl");
    assert_eq!(loaded[0].copyright_year(), 1988);
    assert_eq!(loaded[0].genre(), Genre::Children);
    assert_eq!(reopened.patrons_with_fees(), vec!["Frank"]);
}

#[test]
fn test_check_in_then_check_out_again() {
    let dir = tempdir().unwrap();
    let mut library = Library::new(FileStore::new(dir.path()));
    library.seed_defaults().unwrap();

    assert!(library
        .check_out_book("444-555-666", "123", "2024-05-01")
        .unwrap()
        .is_success());
    assert!(library
        .check_in_book("444-555-666", "2024-05-08")
        .unwrap()
        .is_success());
    assert!(library
        .check_out_book("444-555-666", "123", "2024-05-09")
        .unwrap()
        .is_success());

    let dates: Vec<_> = library.transactions().map(|t| t.date().to_string()).collect();
    assert_eq!(dates, vec!["2024-05-01", "2024-05-09"]);
}
