use tracing::info;

use crate::hive::{HiveApi, HiveError, Post};

/// Pulls the newest `limit` posts for `tag` in a single call.
///
/// Anything older than the last post in this batch is never seen, even if it still falls
/// inside the search window.
pub async fn fetch_candidates(
    hive: &dyn HiveApi,
    tag: &str,
    limit: u32,
) -> Result<Vec<Post>, HiveError> {
    info!(tag, limit, "fetching recent posts");
    let posts = hive.list_recent_by_tag(tag, limit).await?;
    info!(count = posts.len(), "fetched recent posts");
    Ok(posts)
}
