//! Canned test data.

use domain_catalog::Book;

/// A small shelf of recognizably-valid book drafts.
pub fn classic_shelf() -> Vec<Book> {
    vec![
        Book::new(
            "The Left Hand of Darkness",
            vec!["Ursula K. Le Guin".to_string()],
            1969,
            "Ace Books",
            "English",
            304,
        ),
        Book::new(
            "Good Omens",
            vec!["Terry Pratchett".to_string(), "Neil Gaiman".to_string()],
            1990,
            "Gollancz",
            "English",
            288,
        ),
        Book::new(
            "Solaris",
            vec!["Stanisław Lem".to_string()],
            1961,
            "Wydawnictwo MON",
            "Polish",
            204,
        ),
    ]
}
