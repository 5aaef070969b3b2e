//! Search index documents
//!
//! Field names and omission rules are the index schema: `Option` fields are
//! left out of the serialized document when `None`, and the transforms
//! never produce `Some(vec![])`.

use serde::{Deserialize, Serialize};

/// A document ready to hand to the search index
pub trait SearchDocument: Serialize {
    /// Index document id (`_id`)
    ///
    /// URL safe, never contains a slash.
    fn doc_id(&self) -> String;

    /// Serialize to the JSON body sent to the index
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Flattened profile document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDoc {
    /// Time the document was built (UTC, millisecond precision)
    pub doc_index_ts: String,

    /// Author DID
    pub did: String,

    /// Content hash of the source record
    pub record_cid: String,

    /// Author handle; empty when the handle is invalid
    pub handle: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Bio text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Alt text of profile images (not populated yet)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_alt_text: Option<Vec<String>>,

    /// Self-applied labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_label: Option<Vec<String>>,

    /// Hashtags found in the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag: Option<Vec<String>>,

    /// Emoji found in the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Vec<String>>,

    /// Whether an avatar is set
    pub has_avatar: bool,

    /// Whether a banner is set
    pub has_banner: bool,
}

impl SearchDocument for ProfileDoc {
    fn doc_id(&self) -> String {
        self.did.clone()
    }
}

/// Flattened post document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDoc {
    /// Time the document was built (UTC, millisecond precision)
    pub doc_index_ts: String,

    /// Author DID
    pub did: String,

    /// Record key of the post within the author's repo
    pub record_rkey: String,

    /// Content hash of the source record
    pub record_cid: String,

    /// Creation time as written in the record
    pub created_at: String,

    /// Post body
    pub text: String,

    /// Declared language tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_code: Option<Vec<String>>,

    /// Two-letter language codes derived from `lang_code`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_code_iso2: Option<Vec<String>>,

    /// Mentioned accounts, in facet order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_did: Option<Vec<String>>,

    /// Linked URLs, in facet order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<Vec<String>>,

    /// External link card URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,

    /// Quoted record URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_aturi: Option<String>,

    /// Thread root URI, for replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_root_aturi: Option<String>,

    /// Number of gallery images
    pub embed_img_count: usize,

    /// Non-empty gallery alt texts, in image order
    #[serde(default)]
    pub embed_img_alt_text: Vec<String>,

    /// Self-applied labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_label: Option<Vec<String>>,

    /// Hashtags found in the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag: Option<Vec<String>>,

    /// Emoji found in the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Vec<String>>,
}

impl SearchDocument for PostDoc {
    fn doc_id(&self) -> String {
        format!("{}_{}", self.did, self.record_rkey)
    }
}
