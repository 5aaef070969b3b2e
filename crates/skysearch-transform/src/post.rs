//! Post record to post document

use crate::clock::format_index_ts;
use crate::emoji::extract_emoji;
use crate::hashtag::extract_hashtags;
use skysearch_domain::record::{Embed, Facet, FacetFeature, PostRecord};
use skysearch_domain::{Clock, Identity, PostDoc, SearchDocument};
use tracing::{debug, trace};

/// Embed-derived document fields
#[derive(Debug, Default, PartialEq)]
struct EmbedFields {
    url: Option<String>,
    aturi: Option<String>,
    img_count: usize,
    img_alt_text: Vec<String>,
}

impl EmbedFields {
    fn from_embed(embed: Option<&Embed>) -> Self {
        let mut fields = Self::default();
        match embed {
            Some(Embed::Images(gallery)) => {
                fields.img_count = gallery.images.len();
                fields.img_alt_text = gallery
                    .images
                    .iter()
                    .filter(|img| !img.alt.is_empty())
                    .map(|img| img.alt.clone())
                    .collect();
            }
            Some(Embed::External(ext)) => {
                fields.url = Some(ext.external.uri.clone());
            }
            Some(Embed::Record(quote)) => {
                fields.aturi = Some(quote.record.uri.clone());
            }
            // Media inside a record-with-media is not counted or linked;
            // only the quoted record is indexed.
            Some(Embed::RecordWithMedia(rwm)) => {
                fields.aturi = Some(rwm.record.record.uri.clone());
            }
            Some(Embed::Unknown) | None => {}
        }
        fields
    }
}

/// Two-letter language codes from BCP-47 tags
///
/// Keeps the primary subtag when it is exactly two characters, lowercased.
/// Three-letter codes are dropped rather than mapped to their two-letter
/// equivalent.
fn lang_codes_iso2(langs: &[String]) -> Option<Vec<String>> {
    let mut codes = Vec::new();
    for lang in langs {
        let prefix = lang.split('-').next().unwrap_or_default();
        if prefix.chars().count() == 2 {
            codes.push(prefix.to_lowercase());
        } else {
            trace!(lang = %lang, "Skipping language tag without a two-letter prefix");
        }
    }
    non_empty(codes)
}

/// Mentioned DIDs and linked URIs, in facet order, duplicates kept
fn facet_targets(facets: &[Facet]) -> (Option<Vec<String>>, Option<Vec<String>>) {
    let mut mentions = Vec::new();
    let mut links = Vec::new();
    for feature in facets.iter().flat_map(|f| f.features.iter()) {
        match feature {
            FacetFeature::Mention { did } => mentions.push(did.clone()),
            FacetFeature::Link { uri } => links.push(uri.clone()),
            FacetFeature::Tag { .. } | FacetFeature::Unknown => {}
        }
    }
    (non_empty(mentions), non_empty(links))
}

fn non_empty(list: Vec<String>) -> Option<Vec<String>> {
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

/// Flatten a post record into a search document
///
/// `created_at` is copied from the record without parsing. Hashtags and emoji
/// are always scanned from the post text.
pub fn transform_post(
    post: &PostRecord,
    ident: &Identity,
    rkey: &str,
    cid: &str,
    clock: &dyn Clock,
) -> PostDoc {
    let embed = EmbedFields::from_embed(post.embed.as_ref());
    let langs = post.langs.as_deref().unwrap_or_default();
    let (mention_did, link_url) = facet_targets(post.facets.as_deref().unwrap_or_default());

    let doc = PostDoc {
        doc_index_ts: format_index_ts(clock.now()),
        did: ident.did.to_string(),
        record_rkey: rkey.to_string(),
        record_cid: cid.to_string(),
        created_at: post.created_at.clone(),
        text: post.text.clone(),
        lang_code: non_empty(langs.to_vec()),
        lang_code_iso2: lang_codes_iso2(langs),
        mention_did,
        link_url,
        embed_url: embed.url,
        embed_aturi: embed.aturi,
        reply_root_aturi: post.reply.as_ref().map(|r| r.root.uri.clone()),
        embed_img_count: embed.img_count,
        embed_img_alt_text: embed.img_alt_text,
        self_label: post.labels.as_ref().and_then(|l| l.self_label_values()),
        hashtag: extract_hashtags(&post.text),
        emoji: extract_emoji(&post.text),
    };

    debug!(
        doc_id = %doc.doc_id(),
        images = doc.embed_img_count,
        hashtags = doc.hashtag.as_ref().map_or(0, Vec::len),
        emoji = doc.emoji.as_ref().map_or(0, Vec::len),
        "Built post document"
    );

    doc
}
