//! Title search

use crate::types::Post;

/// Indices of posts whose title contains `query`, ignoring case.
///
/// The query is matched as typed (no trimming), so an empty query keeps
/// every post. Server order is preserved.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..posts.len()).collect();
    }

    let query_lower = query.to_lowercase();
    posts
        .iter()
        .enumerate()
        .filter(|(_, p)| p.title.to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect()
}
