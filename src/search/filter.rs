use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::hive::Post;
use crate::search::{AuthorReputationIndex, SearchCriteria};

/// A matching post as it appears in the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredPost {
    pub title: String,
    pub author: String,
    pub permlink: String,
    pub created: String,
    pub url: String,
    pub author_reputation: f64,
    /// Left out of the JSON when the node omitted it, `null` when the node sent `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_votes: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_payout_value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pending_payout_value: Option<serde_json::Value>,
}

impl FilteredPost {
    fn from_post(post: &Post, author_reputation: f64) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            permlink: post.permlink.clone(),
            created: post.created.clone(),
            url: post_url(&post.author, &post.permlink),
            author_reputation,
            net_votes: post.net_votes,
            pending_payout_value: post.pending_payout_value.clone(),
            total_pending_payout_value: post.total_pending_payout_value.clone(),
        }
    }
}

pub fn post_url(author: &str, permlink: &str) -> String {
    format!("https://peakd.com/@{}/{}", author, permlink)
}

/// Recency, author reputation range and vote ceiling, all of which must hold.
///
/// A post whose author has no reputation entry or whose timestamp cannot be read fails.
pub fn passes_filters(
    post: &Post,
    reputations: &AuthorReputationIndex,
    criteria: &SearchCriteria,
    cutoff: DateTime<Utc>,
) -> bool {
    let recent = post.created_at().is_some_and(|created| created > cutoff);
    let reputable = reputations.get(&post.author).is_some_and(|reputation| {
        *reputation >= criteria.min_reputation && *reputation <= criteria.max_reputation
    });
    recent && reputable && post.net_votes_or_zero() <= criteria.max_votes
}

/// Keeps the posts that pass every filter, in fetch order.
pub fn filter_and_format(
    posts: &[Post],
    reputations: &AuthorReputationIndex,
    criteria: &SearchCriteria,
    now: DateTime<Utc>,
) -> Vec<FilteredPost> {
    let cutoff = now - Duration::days(criteria.time_window_days);
    posts
        .iter()
        .filter(|post| passes_filters(post, reputations, criteria, cutoff))
        .filter_map(|post| {
            reputations
                .get(&post.author)
                .map(|reputation| FilteredPost::from_post(post, *reputation))
        })
        .collect()
}
