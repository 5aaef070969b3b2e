//! Hashtag extraction from free text

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// `#` followed by ASCII letters, where the `#` does not follow an ASCII
/// word character. The leading group consumes the preceding character; a
/// previous match always ends in a letter, so it never swallows a `#` that
/// could start the next tag.
///
/// There is no trailing word boundary: the letter run simply stops at the
/// first non-letter, so `#tag1` yields `tag` and `#under_score` yields
/// `under`. A `\b`-terminated pattern would drop both tokens instead.
static HASHTAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9_])#([A-Za-z]+)").expect("hashtag pattern is valid")
});

/// Extract hashtags from text
///
/// Returns tags without the `#`, case preserved, deduplicated by exact match
/// and ordered by first occurrence. Returns `None` when the text has no
/// hashtags.
///
/// # Examples
///
/// ```
/// use skysearch_transform::extract_hashtags;
///
/// assert_eq!(
///     extract_hashtags("#basic post with #HashTag #examples"),
///     Some(vec!["basic".to_string(), "HashTag".to_string(), "examples".to_string()])
/// );
/// assert_eq!(extract_hashtags("https://example.com/thing#fragment"), None);
/// ```
pub fn extract_hashtags(text: &str) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for tag in HASHTAG_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        if seen.insert(tag) {
            tags.push(tag.to_string());
        }
    }

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: results never contain duplicates
        #[test]
        fn test_no_duplicates(text in "[a-zA-Z #_.-]{0,64}") {
            if let Some(tags) = extract_hashtags(&text) {
                let unique: HashSet<_> = tags.iter().collect();
                prop_assert_eq!(unique.len(), tags.len());
            }
        }

        /// Property: every tag is a non-empty ASCII-letter run that appears
        /// in the text right after a `#`
        #[test]
        fn test_tags_come_from_text(text in "[a-zA-Z0-9 #]{0,64}") {
            if let Some(tags) = extract_hashtags(&text) {
                prop_assert!(!tags.is_empty());
                for tag in &tags {
                    prop_assert!(!tag.is_empty());
                    prop_assert!(tag.bytes().all(|b| b.is_ascii_alphabetic()));
                    let needle = format!("#{}", tag);
                    prop_assert!(text.contains(&needle));
                }
            }
        }
    }
}
