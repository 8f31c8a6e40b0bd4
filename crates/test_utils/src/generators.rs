//! Randomized test data via `fake`.
//!
//! Generated values always satisfy the book validation rules, so tests can
//! bulk-insert without tripping the validator.

use domain_catalog::Book;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::Fake;

/// A random title of a few words.
pub fn title() -> String {
    Words(2..5).fake::<Vec<String>>().join(" ")
}

/// Distinct random author names.
pub fn authors(count: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(count);
    while out.len() < count {
        let name: String = Name().fake();
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

/// A publication year safely in the past.
pub fn year() -> i32 {
    (1900..2020).fake()
}

/// A positive page count.
pub fn pages() -> i32 {
    (50..1500).fake()
}

/// A complete random book draft that passes validation.
pub fn book() -> Book {
    Book::new(
        title(),
        authors((1..4).fake()),
        year(),
        CompanyName().fake::<String>(),
        "English",
        pages(),
    )
}
