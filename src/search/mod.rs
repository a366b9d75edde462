pub mod enricher;
pub mod fetcher;
pub mod filter;
pub mod pipeline;

pub use enricher::{distinct_authors, enrich_authors, AuthorReputationIndex};
pub use fetcher::fetch_candidates;
pub use filter::{filter_and_format, passes_filters, FilteredPost};
pub use pipeline::{SearchOutcome, SearchPipeline, SearchResults};

use crate::error::SearchError;

/// The fixed filters applied to every search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchCriteria {
    pub tag: &'static str,
    pub time_window_days: i64,
    pub min_reputation: f64,
    pub max_reputation: f64,
    pub max_votes: i64,
    /// Hive nodes refuse discussion queries above this limit.
    pub max_fetch_limit: u32,
    pub default_fetch_limit: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            tag: "spanish",
            time_window_days: 6,
            min_reputation: 25.0,
            max_reputation: 45.0,
            max_votes: 5,
            max_fetch_limit: 20,
            default_fetch_limit: 20,
        }
    }
}

impl SearchCriteria {
    /// Validates a caller-supplied fetch limit. Missing or blank input means the default.
    pub fn parse_fetch_limit(&self, raw: Option<&str>) -> Result<u32, SearchError> {
        let invalid = || self.invalid_fetch_limit();

        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(self.default_fetch_limit);
        };

        let value = raw.parse::<i64>().map_err(|_| invalid())?;
        if value < 1 || value > i64::from(self.max_fetch_limit) {
            return Err(invalid());
        }
        u32::try_from(value).map_err(|_| invalid())
    }

    pub fn invalid_fetch_limit(&self) -> SearchError {
        SearchError::InvalidFetchLimit {
            min: 1,
            max: self.max_fetch_limit,
        }
    }
}
