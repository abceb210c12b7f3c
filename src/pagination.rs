//! This modules defines how a page of expenses is selected from the query string.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The most expenses returned in a single page.
    ///
    /// Requests for fewer than one, or more than this many, expenses get this many.
    pub max_count: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { max_count: 100 }
    }
}

/// The raw query parameters for listing expenses.
///
/// The values are kept as strings so that non-numeric values can fall back
/// to zero instead of rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// The number of expenses to skip.
    pub start: Option<String>,
    /// The number of expenses to return.
    pub count: Option<String>,
}

impl PageQuery {
    /// Pick `start` and `count` out of decoded query string pairs.
    ///
    /// If a key is repeated, the first value wins. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "start" => &mut query.start,
                "count" => &mut query.count,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }
}

/// A validated page of expenses to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// The number of expenses to skip, never negative.
    pub offset: i64,
    /// The number of expenses to return, between one and the configured maximum.
    pub limit: i64,
}

impl Page {
    /// Clamp the `query` to a valid page.
    ///
    /// Missing or non-numeric values are treated as zero. A count outside
    /// `1..=config.max_count` becomes `config.max_count` and a negative start
    /// becomes zero.
    pub fn from_query(query: &PageQuery, config: &PaginationConfig) -> Self {
        let count = parse_or_zero(query.count.as_deref());
        let start = parse_or_zero(query.start.as_deref());

        let limit = if (1..=config.max_count).contains(&count) {
            count
        } else {
            config.max_count
        };

        Self {
            offset: start.max(0),
            limit,
        }
    }
}

fn parse_or_zero(value: Option<&str>) -> i64 {
    value
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(0)
}
