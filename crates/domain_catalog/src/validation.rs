//! Book validation rules
//!
//! Validation is a pure function from an entity to a field-keyed error set.
//! Every rule is evaluated independently; nothing short-circuits, so a caller
//! sees all violations at once. The first message recorded for a field wins;
//! later rules for the same field do not overwrite it.
//!
//! Numeric fields use "zero means absent" semantics at this boundary only: a
//! `year` or `pages` of 0 reports "must be provided" rather than a range
//! violation. The store always receives concrete values.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::book::Book;

/// Maximum byte length for title, publisher, and language.
pub const MAX_FIELD_BYTES: usize = 500;

/// Maximum number of authors per book.
pub const MAX_AUTHORS: usize = 5;

/// Field-keyed validation errors.
///
/// An explicit accumulator value: rules add into it and the finished set is
/// returned to the caller, never mutated through shared references. Serializes
/// as a plain `field -> message` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("one or more fields failed validation")]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field. The first message per field wins.
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Records `message` under `field` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    /// True when no rule has failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The recorded message for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the set, yielding the underlying map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.errors
    }
}

/// Evaluates every book rule and returns the accumulated error set.
///
/// The entity is valid iff the returned set is empty.
pub fn validate_book(book: &Book) -> ValidationErrors {
    let mut v = ValidationErrors::new();

    v.check(!book.title.is_empty(), "title", "must be provided");
    v.check(
        book.title.len() <= MAX_FIELD_BYTES,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(
        !book.authors.is_empty(),
        "authors",
        "must contain at least 1 author",
    );
    v.check(
        book.authors.len() <= MAX_AUTHORS,
        "authors",
        "must not contain more than 5 authors",
    );
    v.check(
        unique(&book.authors),
        "authors",
        "must not contain duplicate values",
    );

    v.check(book.year != 0, "year", "must be provided");
    v.check(book.year >= 0, "year", "must be greater than 0");
    v.check(
        book.year <= Utc::now().year(),
        "year",
        "must not be in the future",
    );

    v.check(!book.publisher.is_empty(), "publisher", "must be provided");
    v.check(
        book.publisher.len() <= MAX_FIELD_BYTES,
        "publisher",
        "must not be more than 500 bytes long",
    );

    v.check(!book.language.is_empty(), "language", "must be provided");
    v.check(
        book.language.len() <= MAX_FIELD_BYTES,
        "language",
        "must not be more than 500 bytes long",
    );

    v.check(book.pages != 0, "pages", "must be provided");
    v.check(book.pages > 0, "pages", "must be a positive integer");

    v
}

/// Case-sensitive uniqueness check.
fn unique(values: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value.as_str()))
}
