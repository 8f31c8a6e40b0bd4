//! List query resolution
//!
//! Turns untrusted, string-typed query parameters into a bounded query
//! specification: a [`BookFilter`] plus [`ListOptions`]. Numeric parameters
//! are parsed and range-checked; the sort token is matched exactly against a
//! fixed safe-list, which is the mechanism that keeps unvalidated input out
//! of dynamically constructed ORDER BY clauses. Any violation is reported as
//! a field error, never silently ignored.

use serde::Serialize;

use crate::validation::ValidationErrors;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// The exact set of sort tokens accepted by the resolver. Anything else is a
/// validation error and never reaches the store.
pub const SORT_SAFELIST: [&str; 8] = [
    "id", "title", "year", "pages", "-id", "-title", "-year", "-pages",
];

/// A sortable column of the books table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Year,
    Pages,
}

impl SortField {
    /// The column name used in ORDER BY clauses. Static by construction, so
    /// it can be interpolated into query text safely.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Year => "year",
            SortField::Pages => "pages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// A validated sort specification: a safe-listed field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    /// Parses a sort token by exact match against [`SORT_SAFELIST`].
    ///
    /// The leading `-` marks descending order. Returns `None` for any token
    /// outside the safe-list; callers turn that into a field error.
    pub fn parse(token: &str) -> Option<Self> {
        let (direction, field) = match token.strip_prefix('-') {
            Some(rest) => (SortDirection::Descending, rest),
            None => (SortDirection::Ascending, token),
        };

        let field = match field {
            "id" => SortField::Id,
            "title" => SortField::Title,
            "year" => SortField::Year,
            "pages" => SortField::Pages,
            _ => return None,
        };

        Some(Self { field, direction })
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: SortDirection::Ascending,
        }
    }
}

/// Validated pagination bounds: `page >= 1`, `page_size` in `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

impl Pagination {
    pub fn limit(self) -> i64 {
        self.page_size
    }

    pub fn offset(self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Optional row filters for the list query. Empty values mean "no filter";
/// the repository renders them as always-true predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Substring match against titles.
    pub title: String,
    /// Books must contain every listed author.
    pub authors: Vec<String>,
    /// Exact publisher match.
    pub publisher: String,
    /// Exact language match.
    pub language: String,
}

/// Pagination plus sort for a single list query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub pagination: Pagination,
    pub sort: Sort,
}

/// Presentation metadata computed from the filtered row count. These values
/// describe the result set; they are not enforced limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub current_page: i64,
    pub page_size: i64,
    pub first_page: i64,
    pub last_page: i64,
    pub total_records: i64,
}

impl PageMetadata {
    /// Computes metadata for `total_records` matching rows. An empty result
    /// set yields all-zero metadata.
    pub fn calculate(total_records: i64, page: i64, page_size: i64) -> Self {
        if total_records == 0 {
            return Self::default();
        }

        Self {
            current_page: page,
            page_size,
            first_page: 1,
            last_page: (total_records + page_size - 1) / page_size,
            total_records,
        }
    }
}

/// Raw, untrusted list-query inputs as received from the transport layer.
#[derive(Debug, Clone, Default)]
pub struct RawListParams {
    pub title: Option<String>,
    /// Comma-separated author names.
    pub authors: Option<String>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
}

impl RawListParams {
    /// Resolves raw inputs into a validated `(BookFilter, ListOptions)` pair.
    ///
    /// All parameters are checked independently so a single request reports
    /// every violation at once. Absent parameters take their defaults
    /// (page 1, page size 10, sort by ascending id, no filters).
    pub fn resolve(self) -> Result<(BookFilter, ListOptions), ValidationErrors> {
        let mut v = ValidationErrors::new();

        let page = parse_positive_int(&mut v, self.page, "page", DEFAULT_PAGE);
        let page_size = parse_positive_int(&mut v, self.page_size, "page_size", DEFAULT_PAGE_SIZE);
        v.check(
            page_size <= MAX_PAGE_SIZE,
            "page_size",
            "must be a maximum of 100",
        );

        let sort = match self.sort.as_deref() {
            None => Sort::default(),
            Some(token) => match Sort::parse(token) {
                Some(sort) => sort,
                None => {
                    v.add("sort", "invalid sort value");
                    Sort::default()
                }
            },
        };

        if !v.is_empty() {
            return Err(v);
        }

        let filter = BookFilter {
            title: self.title.unwrap_or_default(),
            authors: split_csv(self.authors.as_deref().unwrap_or_default()),
            publisher: self.publisher.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
        };

        let options = ListOptions {
            pagination: Pagination { page, page_size },
            sort,
        };

        Ok((filter, options))
    }
}

/// Parses an optional integer parameter, requiring a value above zero.
/// Records a field error and returns `default` on failure so resolution can
/// continue collecting errors for the remaining parameters.
fn parse_positive_int(
    v: &mut ValidationErrors,
    raw: Option<String>,
    field: &str,
    default: i64,
) -> i64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => {
            v.check(value > 0, field, "must be greater than zero");
            value
        }
        Err(_) => {
            v.add(field, "must be an integer value");
            default
        }
    }
}

/// Splits a comma-separated value into trimmed, non-empty entries, keeping
/// the original order.
fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parse_accepts_every_safelist_token() {
        for token in SORT_SAFELIST {
            assert!(Sort::parse(token).is_some(), "token {token:?} rejected");
        }
    }

    #[test]
    fn sort_parse_rejects_unknown_tokens() {
        for token in ["version", "-version", "ID", " id", "id ", "--id", "-", ""] {
            assert!(Sort::parse(token).is_none(), "token {token:?} accepted");
        }
    }

    #[test]
    fn sort_parse_maps_direction_and_column() {
        let sort = Sort::parse("-year").unwrap();
        assert_eq!(sort.field.column(), "year");
        assert_eq!(sort.direction.sql(), "DESC");

        let sort = Sort::parse("title").unwrap();
        assert_eq!(sort.field.column(), "title");
        assert_eq!(sort.direction.sql(), "ASC");
    }

    #[test]
    fn metadata_rounds_the_last_page_up() {
        let metadata = PageMetadata::calculate(25, 1, 10);
        assert_eq!(
            metadata,
            PageMetadata {
                current_page: 1,
                page_size: 10,
                first_page: 1,
                last_page: 3,
                total_records: 25,
            }
        );
    }

    #[test]
    fn metadata_for_exact_division() {
        assert_eq!(PageMetadata::calculate(20, 2, 10).last_page, 2);
    }

    #[test]
    fn metadata_for_empty_result_set_is_zeroed() {
        assert_eq!(PageMetadata::calculate(0, 3, 10), PageMetadata::default());
    }

    #[test]
    fn pagination_offset_math() {
        let pagination = Pagination {
            page: 3,
            page_size: 20,
        };
        assert_eq!(pagination.limit(), 20);
        assert_eq!(pagination.offset(), 40);
    }
}
