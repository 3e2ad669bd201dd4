//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Get the app data directory (settings and logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// "12 posts", "1 post", or "3 of 12 posts" when a search narrows the list
pub fn count_label(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "post" } else { "posts" };
    if shown == total {
        format!("{} {}", total, noun)
    } else {
        format!("{} of {} {}", shown, total, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_variants() {
        assert_eq!(count_label(1, 1), "1 post");
        assert_eq!(count_label(100, 100), "100 posts");
        assert_eq!(count_label(3, 100), "3 of 100 posts");
        assert_eq!(count_label(0, 0), "0 posts");
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
