use std::collections::{HashMap, HashSet};
use tracing::info;

use crate::hive::{HiveApi, HiveError, Post};
use crate::reputation::calculate_reputation;

/// Author name to display reputation, built fresh for every search.
pub type AuthorReputationIndex = HashMap<String, f64>;

/// Unique authors in first-seen order.
pub fn distinct_authors(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .filter(|post| seen.insert(post.author.as_str()))
        .map(|post| post.author.clone())
        .collect()
}

/// Looks up every distinct author with one `fetch_accounts` call.
///
/// Authors the node does not return are left out of the index.
pub async fn enrich_authors(
    hive: &dyn HiveApi,
    posts: &[Post],
) -> Result<AuthorReputationIndex, HiveError> {
    let authors = distinct_authors(posts);
    if authors.is_empty() {
        return Ok(AuthorReputationIndex::new());
    }

    info!(authors = authors.len(), "fetching account details");
    let accounts = hive.fetch_accounts(&authors).await?;
    info!(accounts = accounts.len(), "received account details");

    Ok(accounts
        .into_iter()
        .map(|account| {
            let reputation = calculate_reputation(account.reputation);
            (account.name, reputation)
        })
        .collect())
}
