//! Profile record to profile document

use crate::clock::format_index_ts;
use crate::emoji::extract_emoji;
use crate::hashtag::extract_hashtags;
use skysearch_domain::record::ProfileRecord;
use skysearch_domain::{Clock, Identity, ProfileDoc, SearchDocument};
use tracing::debug;

/// Flatten a profile record into a search document
///
/// Hashtags and emoji come from the description. `img_alt_text` stays empty
/// until profile blobs carry alt text.
pub fn transform_profile(
    profile: &ProfileRecord,
    ident: &Identity,
    cid: &str,
    clock: &dyn Clock,
) -> ProfileDoc {
    let (hashtag, emoji) = match profile.description.as_deref() {
        Some(description) => (extract_hashtags(description), extract_emoji(description)),
        None => (None, None),
    };

    let doc = ProfileDoc {
        doc_index_ts: format_index_ts(clock.now()),
        did: ident.did.to_string(),
        record_cid: cid.to_string(),
        handle: ident.indexable_handle(),
        display_name: profile.display_name.clone(),
        description: profile.description.clone(),
        img_alt_text: None,
        self_label: profile.labels.as_ref().and_then(|l| l.self_label_values()),
        hashtag,
        emoji,
        has_avatar: profile.avatar.is_some(),
        has_banner: profile.banner.is_some(),
    };

    debug!(
        doc_id = %doc.doc_id(),
        hashtags = doc.hashtag.as_ref().map_or(0, Vec::len),
        emoji = doc.emoji.as_ref().map_or(0, Vec::len),
        "Built profile document"
    );

    doc
}
