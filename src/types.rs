//! Common types and data structures

use serde::Deserialize;

/// A post as returned by the remote API. Extra fields such as `userId` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Fetch lifecycle. Loading and failure can never be shown together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// What the main area renders this frame
#[derive(Debug, PartialEq, Eq)]
pub enum Body<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Posts(Vec<&'a Post>),
}
