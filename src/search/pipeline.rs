use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::hive::{HiveApi, HiveError};
use crate::search::{
    enrich_authors, fetch_candidates, filter_and_format, FilteredPost, SearchCriteria,
};

#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Size of the candidate batch before filtering.
    pub fetched: usize,
    pub posts: Vec<FilteredPost>,
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The node had no posts for the tag; nothing was enriched or filtered.
    Empty,
    Found(SearchResults),
}

/// Fetch, enrich and filter, sharing nothing between runs except the node client.
#[derive(Clone)]
pub struct SearchPipeline {
    hive: Arc<dyn HiveApi>,
    criteria: SearchCriteria,
}

impl SearchPipeline {
    pub fn new(hive: Arc<dyn HiveApi>, criteria: SearchCriteria) -> Self {
        Self { hive, criteria }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub async fn run(&self, limit: u32) -> Result<SearchOutcome, HiveError> {
        self.run_at(limit, Utc::now()).await
    }

    pub async fn run_at(&self, limit: u32, now: DateTime<Utc>) -> Result<SearchOutcome, HiveError> {
        let criteria = &self.criteria;
        info!(
            tag = criteria.tag,
            days = criteria.time_window_days,
            min_reputation = criteria.min_reputation,
            max_reputation = criteria.max_reputation,
            max_votes = criteria.max_votes,
            "searching posts"
        );

        let candidates = fetch_candidates(self.hive.as_ref(), criteria.tag, limit).await?;
        if candidates.is_empty() {
            return Ok(SearchOutcome::Empty);
        }

        let reputations = enrich_authors(self.hive.as_ref(), &candidates).await?;
        let posts = filter_and_format(&candidates, &reputations, criteria, now);
        info!(matched = posts.len(), "finished filtering");

        Ok(SearchOutcome::Found(SearchResults {
            fetched: candidates.len(),
            posts,
        }))
    }
}
