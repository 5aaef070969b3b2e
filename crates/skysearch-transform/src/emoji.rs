//! Emoji extraction by grapheme cluster

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Whether a codepoint opens an emoji cluster
///
/// Only the supplementary emoji planes (U+1F000..=U+1FFFF) and Miscellaneous
/// Symbols (U+2600..=U+26FF) count. Dingbats, arrows and other BMP emoji are
/// not recognised.
fn is_emoji_start(c: char) -> bool {
    matches!(c as u32, 0x1F000..=0x1FFFF | 0x2600..=0x26FF)
}

/// Extract emoji from text
///
/// Text is split into extended grapheme clusters; a cluster whose first
/// codepoint is an emoji start is kept whole, so ZWJ sequences, skin tone
/// modifiers and variation selectors stay attached. Results are deduplicated
/// by exact match and ordered by first occurrence. Returns `None` when the
/// text has no emoji.
///
/// # Examples
///
/// ```
/// use skysearch_transform::extract_emoji;
///
/// assert_eq!(
///     extract_emoji("more ⛄ from ☠ lower ⛴ range"),
///     Some(vec!["⛄".to_string(), "☠".to_string(), "⛴".to_string()])
/// );
/// assert_eq!(extract_emoji("blah"), None);
/// ```
pub fn extract_emoji(text: &str) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let mut emoji = Vec::new();

    for cluster in text.graphemes(true) {
        let starts_with_emoji = cluster.chars().next().is_some_and(is_emoji_start);
        if starts_with_emoji && seen.insert(cluster) {
            emoji.push(cluster.to_string());
        }
    }

    if emoji.is_empty() {
        None
    } else {
        Some(emoji)
    }
}
