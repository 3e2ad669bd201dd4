//! Application constants and configuration

pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const APP_NAME: &str = "Posts Viewer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const USER_AGENT: &str = concat!("posts-viewer/", env!("CARGO_PKG_VERSION"));
