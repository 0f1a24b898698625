//! Catalog listing helpers: sort keys, ordering, and limits.
//!
//! Sort keys map to fixed SQL fragments so user input never reaches the
//! `ORDER BY` clause directly.

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default size of the popular and box-office listings.
pub const DEFAULT_RANKED_LIMIT: i64 = 50;

/// Default size of the new-releases listing.
pub const DEFAULT_NEW_RELEASES_LIMIT: i64 = 10;

/// Default size of the genre and year listings.
pub const DEFAULT_BROWSE_LIMIT: i64 = 50;

/// Number of movies returned by the featured listing.
pub const FEATURED_LIMIT: i64 = 10;

/// Upper bound for any caller-supplied `limit`.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `1..=max`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sort key accepted by the movie search listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieSort {
    #[default]
    Title,
    Rating,
    BoxOffice,
    Year,
    ReleaseDate,
}

impl MovieSort {
    /// Parse a `sortBy` query value. Unknown or missing values sort by title.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("rating") | Some("popularity") => MovieSort::Rating,
            Some("boxoffice") | Some("box_office") => MovieSort::BoxOffice,
            Some("year") => MovieSort::Year,
            Some("release_date") => MovieSort::ReleaseDate,
            _ => MovieSort::Title,
        }
    }

    /// SQL expression the listing orders by, over the movie summary columns.
    pub fn sql_expr(self) -> &'static str {
        match self {
            MovieSort::Title => "title",
            MovieSort::Rating => "avg_rating",
            MovieSort::BoxOffice => "box_office",
            MovieSort::Year => "EXTRACT(YEAR FROM release_date)",
            MovieSort::ReleaseDate => "release_date",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse an `order` query value case-insensitively, defaulting to ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
