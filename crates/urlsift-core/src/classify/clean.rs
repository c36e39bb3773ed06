//! Cosmetic cleanup of emitted URLs.

use regex::Regex;
use std::sync::LazyLock;

static VERSION_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?v=.*$").expect("version query pattern"));
static FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#.*$").expect("fragment pattern"));

/// Strips a trailing `?v=...` version query, then a trailing `#...` fragment.
/// Applied to output only, never to the value being classified.
pub fn clean_output(url: &str) -> String {
    let without_version = VERSION_QUERY.replace(url, "");
    FRAGMENT.replace(&without_version, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_version_query() {
        assert_eq!(
            clean_output("https://example.com/app.js?v=3.1.4"),
            "https://example.com/app.js"
        );
    }

    #[test]
    fn strips_fragment() {
        assert_eq!(
            clean_output("https://example.com/docs#section-2"),
            "https://example.com/docs"
        );
    }

    #[test]
    fn strips_both() {
        assert_eq!(
            clean_output("https://example.com/a?v=2#top"),
            "https://example.com/a"
        );
    }

    #[test]
    fn keeps_other_queries() {
        assert_eq!(
            clean_output("https://example.com/a?id=7&v=2"),
            "https://example.com/a?id=7&v=2"
        );
        assert_eq!(
            clean_output("https://example.com/search?q=x"),
            "https://example.com/search?q=x"
        );
    }
}
