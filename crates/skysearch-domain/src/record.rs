//! Decoded profile and post records
//!
//! These mirror the network's lexicon JSON: camelCase keys and `$type`
//! discriminators on every union. Unions carry an `Unknown` variant so that
//! records using newer embed or label types still decode; the transforms
//! simply ignore what they do not recognise.

use serde::{Deserialize, Serialize};

/// Lexicon type of profile records
pub const PROFILE_RECORD_TYPE: &str = "app.bsky.actor.profile";

/// Lexicon type of post records
pub const POST_RECORD_TYPE: &str = "app.bsky.feed.post";

/// Account profile record (`app.bsky.actor.profile`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Free-text bio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Avatar image blob
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Blob>,

    /// Banner image blob
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Blob>,

    /// Labels applied by the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<RecordLabels>,
}

/// Post record (`app.bsky.feed.post`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    /// Post body
    pub text: String,

    /// Client-declared creation time, kept verbatim
    pub created_at: String,

    /// Attached media or quoted content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,

    /// Rich-text annotations over byte ranges of `text`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets: Option<Vec<Facet>>,

    /// Thread position, when this post is a reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyRef>,

    /// Labels applied by the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<RecordLabels>,

    /// Declared language tags (BCP-47)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub langs: Option<Vec<String>>,

    /// Out-of-text tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Reference to a specific version of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrongRef {
    /// `at://` URI of the record
    pub uri: String,

    /// Content hash of the referenced version
    #[serde(default)]
    pub cid: String,
}

/// Reply position within a thread
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRef {
    /// First post of the thread
    pub root: StrongRef,

    /// Post being replied to directly
    pub parent: StrongRef,
}

/// Reference to uploaded binary content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// Content link (current blob format)
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<CidLink>,

    /// Bare content hash (legacy blob format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,

    /// MIME type of the content
    #[serde(default)]
    pub mime_type: String,

    /// Size in bytes (absent on legacy blobs)
    #[serde(default)]
    pub size: u64,
}

impl Blob {
    /// Content hash, from either blob format
    pub fn cid(&self) -> Option<&str> {
        self.reference
            .as_ref()
            .map(|r| r.link.as_str())
            .or(self.cid.as_deref())
    }
}

/// `{"$link": "<cid>"}` wrapper used inside blobs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidLink {
    /// Content hash
    #[serde(rename = "$link")]
    pub link: String,
}

/// Embedded content attached to a post
///
/// At most one variant is present per post; `RecordWithMedia` combines a
/// quoted record with images or an external link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Embed {
    /// Image gallery
    #[serde(rename = "app.bsky.embed.images")]
    Images(EmbedImages),

    /// External link card
    #[serde(rename = "app.bsky.embed.external")]
    External(EmbedExternal),

    /// Quoted record
    #[serde(rename = "app.bsky.embed.record")]
    Record(EmbedRecord),

    /// Quoted record plus media
    #[serde(rename = "app.bsky.embed.recordWithMedia")]
    RecordWithMedia(EmbedRecordWithMedia),

    /// Any embed type this crate does not model
    #[serde(other)]
    Unknown,
}

/// Image gallery embed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedImages {
    /// Images in display order
    pub images: Vec<Image>,
}

/// Single image in a gallery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Alt text; empty when the author provided none
    #[serde(default)]
    pub alt: String,

    /// Image content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Blob>,

    /// Width/height hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
}

/// Image dimensions hint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

/// External link card embed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedExternal {
    /// Link card contents
    pub external: External,
}

/// External link card contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct External {
    /// Linked URL
    pub uri: String,

    /// Card title
    #[serde(default)]
    pub title: String,

    /// Card description
    #[serde(default)]
    pub description: String,

    /// Card thumbnail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<Blob>,
}

/// Quoted record embed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedRecord {
    /// The quoted record
    pub record: StrongRef,
}

/// Quoted record combined with media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedRecordWithMedia {
    /// The quoted record
    pub record: EmbedRecord,

    /// Accompanying media
    pub media: Media,
}

/// Media half of a record-with-media embed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Media {
    /// Image gallery
    #[serde(rename = "app.bsky.embed.images")]
    Images(EmbedImages),

    /// External link card
    #[serde(rename = "app.bsky.embed.external")]
    External(EmbedExternal),

    /// Any media type this crate does not model
    #[serde(other)]
    Unknown,
}

/// Rich-text annotation over a byte range of post text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    /// Annotated byte range
    pub index: ByteSlice,

    /// What the range refers to
    pub features: Vec<FacetFeature>,
}

/// Half-open UTF-8 byte range `[byte_start, byte_end)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteSlice {
    /// Inclusive start
    pub byte_start: usize,
    /// Exclusive end
    pub byte_end: usize,
}

/// Facet feature union
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum FacetFeature {
    /// Account mention
    #[serde(rename = "app.bsky.richtext.facet#mention")]
    Mention {
        /// Mentioned account
        did: String,
    },

    /// Hyperlink
    #[serde(rename = "app.bsky.richtext.facet#link")]
    Link {
        /// Link target
        uri: String,
    },

    /// Hashtag annotation
    #[serde(rename = "app.bsky.richtext.facet#tag")]
    Tag {
        /// Tag text without the leading `#`
        tag: String,
    },

    /// Any feature type this crate does not model
    #[serde(other)]
    Unknown,
}

/// Label set attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum RecordLabels {
    /// Labels the author applied to their own record
    #[serde(rename = "com.atproto.label.defs#selfLabels")]
    SelfLabels(SelfLabels),

    /// Any label set type this crate does not model
    #[serde(other)]
    Unknown,
}

impl RecordLabels {
    /// Flattened self-label values, or `None` when there are none
    pub fn self_label_values(&self) -> Option<Vec<String>> {
        match self {
            RecordLabels::SelfLabels(labels) if !labels.values.is_empty() => {
                Some(labels.values.iter().map(|l| l.val.clone()).collect())
            }
            _ => None,
        }
    }
}

/// Self-applied label set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfLabels {
    /// Applied labels
    pub values: Vec<SelfLabel>,
}

/// Single self-applied label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfLabel {
    /// Label value (e.g. `nudity`)
    pub val: String,
}
