//! Validation rule tests for the book entity.

use chrono::{Datelike, Utc};
use domain_catalog::{validate_book, Book, BookPatch};

fn valid_book() -> Book {
    Book::new(
        "A Wizard of Earthsea",
        vec!["Ursula K. Le Guin".to_string()],
        1968,
        "Parnassus Press",
        "English",
        183,
    )
}

#[test]
fn valid_book_has_no_errors() {
    let errors = validate_book(&valid_book());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn empty_title_is_rejected() {
    let mut book = valid_book();
    book.title = String::new();

    let errors = validate_book(&book);
    assert_eq!(errors.get("title"), Some("must be provided"));
}

#[test]
fn title_length_is_measured_in_bytes() {
    let mut book = valid_book();
    book.title = "a".repeat(500);
    assert!(validate_book(&book).is_empty());

    book.title = "a".repeat(501);
    assert_eq!(
        validate_book(&book).get("title"),
        Some("must not be more than 500 bytes long")
    );

    // 300 two-byte characters exceed the byte limit even though the character
    // count does not.
    book.title = "é".repeat(300);
    assert_eq!(
        validate_book(&book).get("title"),
        Some("must not be more than 500 bytes long")
    );
}

#[test]
fn authors_must_not_be_empty() {
    let mut book = valid_book();
    book.authors = vec![];

    let errors = validate_book(&book);
    assert_eq!(errors.get("authors"), Some("must contain at least 1 author"));
}

#[test]
fn six_authors_report_one_authors_error_and_nothing_else() {
    let mut book = valid_book();
    book.authors = (1..=6).map(|n| format!("Author {n}")).collect();

    let errors = validate_book(&book);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("authors"),
        Some("must not contain more than 5 authors")
    );
}

#[test]
fn duplicate_authors_are_rejected() {
    let mut book = valid_book();
    book.authors = vec!["Anna Burns".to_string(), "Anna Burns".to_string()];

    let errors = validate_book(&book);
    assert_eq!(
        errors.get("authors"),
        Some("must not contain duplicate values")
    );
}

#[test]
fn case_differing_authors_are_not_duplicates() {
    let mut book = valid_book();
    book.authors = vec!["anna burns".to_string(), "Anna Burns".to_string()];

    assert!(validate_book(&book).is_empty());
}

#[test]
fn zero_year_means_absent() {
    let mut book = valid_book();
    book.year = 0;

    let errors = validate_book(&book);
    assert_eq!(errors.get("year"), Some("must be provided"));
}

#[test]
fn negative_year_is_rejected() {
    let mut book = valid_book();
    book.year = -500;

    let errors = validate_book(&book);
    assert_eq!(errors.get("year"), Some("must be greater than 0"));
}

#[test]
fn future_year_is_rejected_and_current_year_accepted() {
    let mut book = valid_book();
    let current_year = Utc::now().year();

    book.year = current_year;
    assert!(validate_book(&book).is_empty());

    book.year = current_year + 1;
    assert_eq!(
        validate_book(&book).get("year"),
        Some("must not be in the future")
    );
}

#[test]
fn zero_pages_means_absent_and_negative_is_rejected() {
    let mut book = valid_book();

    book.pages = 0;
    assert_eq!(validate_book(&book).get("pages"), Some("must be provided"));

    book.pages = -1;
    assert_eq!(
        validate_book(&book).get("pages"),
        Some("must be a positive integer")
    );
}

#[test]
fn empty_publisher_and_language_are_rejected() {
    let mut book = valid_book();
    book.publisher = String::new();
    book.language = String::new();

    let errors = validate_book(&book);
    assert_eq!(errors.get("publisher"), Some("must be provided"));
    assert_eq!(errors.get("language"), Some("must be provided"));
}

#[test]
fn rules_are_not_short_circuited() {
    let book = Book::new("", vec![], 0, "", "", 0);

    let errors = validate_book(&book);
    assert_eq!(errors.len(), 6);
    for field in ["title", "authors", "year", "publisher", "language", "pages"] {
        assert!(errors.get(field).is_some(), "missing error for {field}");
    }
}

#[test]
fn patched_book_is_validated_as_a_whole() {
    let mut book = valid_book();
    let patch = BookPatch {
        year: Some(0),
        ..Default::default()
    };

    patch.apply(&mut book);

    let errors = validate_book(&book);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("year"), Some("must be provided"));
}
