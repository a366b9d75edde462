use serde::Serialize;

use crate::search::{FilteredPost, SearchCriteria, SearchResults};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub tag: String,
    pub time_window_days: i64,
    pub min_reputation: f64,
    pub max_reputation: f64,
    pub max_votes: i64,
    pub initial_fetch_limit: u32,
    pub requested_initial_fetch_limit: u32,
    pub found_posts: usize,
    pub fetched_posts: usize,
    /// The batch filled the limit, so older posts inside the window may have been missed.
    pub possibly_incomplete: bool,
    pub posts: Vec<FilteredPost>,
}

impl SearchResponse {
    pub fn new(criteria: &SearchCriteria, limit: u32, results: SearchResults) -> Self {
        Self {
            tag: criteria.tag.to_string(),
            time_window_days: criteria.time_window_days,
            min_reputation: criteria.min_reputation,
            max_reputation: criteria.max_reputation,
            max_votes: criteria.max_votes,
            initial_fetch_limit: limit,
            requested_initial_fetch_limit: limit,
            found_posts: results.posts.len(),
            fetched_posts: results.fetched,
            possibly_incomplete: results.fetched >= limit as usize,
            posts: results.posts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmptySearchResponse {
    pub message: String,
    pub posts: Vec<FilteredPost>,
}

impl EmptySearchResponse {
    pub fn for_tag(tag: &str) -> Self {
        Self {
            message: format!(
                "No recent posts found with tag \"{}\" in the initial fetch.",
                tag
            ),
            posts: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
