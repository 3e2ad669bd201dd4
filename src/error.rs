//! Error types for fetching posts

use thiserror::Error;

/// Errors that can occur while loading the post list.
///
/// The view only shows the `Display` text; the variants exist so the log
/// can tell a dead network apart from a bad response.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("failed to initialise HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, TLS or other transport failure
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// Body was not a JSON array of posts
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_is_readable() {
        let err = FetchError::Status { status: 404 };
        assert_eq!(err.to_string(), "server responded with status 404");
    }
}
