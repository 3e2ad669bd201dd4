//! Post list state, independent of egui

use super::filters::filter_posts;
use crate::error::FetchError;
use crate::types::{Body, LoadState, Post};
use tracing::{debug, error, info};

pub struct PostsView {
    posts: Vec<Post>,
    filtered_indices: Vec<usize>,
    search_query: String,
    load_state: LoadState,
}

impl Default for PostsView {
    fn default() -> Self {
        Self::new()
    }
}

impl PostsView {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            filtered_indices: Vec::new(),
            search_query: String::new(),
            load_state: LoadState::Loading,
        }
    }

    pub fn begin_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Store the outcome of a fetch. A successful fetch replaces the whole list.
    pub fn finish(&mut self, result: Result<Vec<Post>, FetchError>) {
        match result {
            Ok(posts) => {
                info!(count = posts.len(), "Post list replaced");
                self.posts = posts;
                self.load_state = LoadState::Ready;
                self.apply_filters();
            }
            Err(e) => {
                error!(error = %e, "Failed to load posts");
                self.fail(e.to_string());
            }
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.load_state = LoadState::Failed(message.into());
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.apply_filters();
    }

    /// Mutable access for the search box; call `apply_filters` after edits.
    pub fn search_query_mut(&mut self) -> &mut String {
        &mut self.search_query
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn apply_filters(&mut self) {
        self.filtered_indices = filter_posts(&self.posts, &self.search_query);
        debug!(
            query = %self.search_query,
            shown = self.filtered_indices.len(),
            total = self.posts.len(),
            "Filter applied"
        );
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn total_count(&self) -> usize {
        self.posts.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    pub fn body(&self) -> Body<'_> {
        match &self.load_state {
            LoadState::Loading => Body::Loading,
            LoadState::Failed(message) => Body::Error(message),
            LoadState::Ready if self.filtered_indices.is_empty() => Body::Empty,
            LoadState::Ready => Body::Posts(
                self.filtered_indices
                    .iter()
                    .filter_map(|&i| self.posts.get(i))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post { id, title: title.into(), body: format!("body of {}", id) }
    }

    fn loaded(titles: &[&str]) -> PostsView {
        let mut view = PostsView::new();
        let posts = titles
            .iter()
            .enumerate()
            .map(|(i, t)| post(i as u64 + 1, t))
            .collect();
        view.finish(Ok(posts));
        view
    }

    fn titles<'a>(body: &Body<'a>) -> Vec<&'a str> {
        match body {
            Body::Posts(posts) => posts.iter().map(|&p| p.title.as_str()).collect(),
            other => panic!("expected posts, got {:?}", other),
        }
    }

    #[test]
    fn default_matches_new() {
        let view = PostsView::default();
        assert_eq!(view.load_state(), &LoadState::Loading);
        assert_eq!(view.total_count(), 0);
    }

    #[test]
    fn starts_loading() {
        let view = PostsView::new();
        assert_eq!(view.body(), Body::Loading);
        assert_eq!(view.search_query(), "");
    }

    #[test]
    fn empty_search_shows_every_post() {
        let view = loaded(&["a", "b", "c", "d", "e"]);
        match view.body() {
            Body::Posts(posts) => assert_eq!(posts.len(), 5),
            other => panic!("expected posts, got {:?}", other),
        }
        assert_eq!(view.filtered_count(), view.total_count());
    }

    #[test]
    fn search_narrows_case_insensitively() {
        let mut view = loaded(&["Rust in Action", "Go basics", "rusty nails", "TRUST"]);
        view.set_search_query("RUST");
        assert_eq!(titles(&view.body()), vec!["Rust in Action", "rusty nails", "TRUST"]);

        view.set_search_query("go");
        assert_eq!(titles(&view.body()), vec!["Go basics"]);
    }

    #[test]
    fn search_before_load_applies_once_posts_arrive() {
        let mut view = PostsView::new();
        view.set_search_query("b");
        assert_eq!(view.body(), Body::Loading);

        view.finish(Ok(vec![post(1, "abc"), post(2, "xyz")]));
        assert_eq!(titles(&view.body()), vec!["abc"]);
    }

    #[test]
    fn failure_shows_message_and_no_list() {
        let mut view = PostsView::new();
        view.finish(Err(FetchError::Status { status: 503 }));
        assert_eq!(view.body(), Body::Error("server responded with status 503"));

        view.set_search_query("");
        assert!(matches!(view.body(), Body::Error(_)));
    }

    #[test]
    fn no_matches_is_empty_state() {
        let mut view = loaded(&["alpha", "beta"]);
        view.set_search_query("gamma");
        assert_eq!(view.body(), Body::Empty);
    }

    #[test]
    fn empty_response_is_empty_state() {
        let view = loaded(&[]);
        assert_eq!(view.body(), Body::Empty);
    }

    #[test]
    fn successful_fetch_replaces_list() {
        let mut view = loaded(&["old one", "old two"]);
        view.begin_loading();
        assert_eq!(view.body(), Body::Loading);

        view.finish(Ok(vec![post(9, "new")]));
        assert_eq!(titles(&view.body()), vec!["new"]);
        assert_eq!(view.total_count(), 1);
    }

    #[test]
    fn loading_clears_previous_error() {
        let mut view = PostsView::new();
        view.fail("boom");
        view.begin_loading();
        assert_eq!(view.load_state(), &LoadState::Loading);
    }

    #[test]
    fn edits_through_mut_apply_after_refilter() {
        let mut view = loaded(&["one", "two"]);
        view.search_query_mut().push_str("tw");
        view.apply_filters();
        assert_eq!(titles(&view.body()), vec!["two"]);
    }
}
