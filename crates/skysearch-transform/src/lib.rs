//! Skysearch Transform
//!
//! Builds search index documents from profile and post records.
//!
//! # Overview
//!
//! Each transform takes a decoded record, the author's identity and the
//! record's content hash, and returns a flattened document. Transforms are
//! pure apart from reading the clock, never fail, and are safe to call from
//! any number of threads at once.
//!
//! # Architecture
//!
//! ```text
//! raw JSON → (decode) → Record ─┬→ ProfileTransformer → ProfileDoc ─┐
//!                               └→ PostTransformer    → PostDoc    ─┴→ index
//!                                   ├ HashtagExtractor
//!                                   └ EmojiExtractor
//! ```
//!
//! # Example Usage
//!
//! ```
//! use skysearch_domain::{Did, Handle, Identity, SearchDocument};
//! use skysearch_transform::{FixedClock, TransformConfig, Transformer};
//!
//! let clock = FixedClock::from_rfc3339("2006-01-02T15:04:05Z").unwrap();
//! let transformer = Transformer::with_clock(clock, TransformConfig::default());
//! let ident = Identity::new(Did::new("did:plc:alice"), Handle::new("alice.test"));
//!
//! let raw = r#"{
//!     "$type": "app.bsky.feed.post",
//!     "text": "shipping #rust 🦀",
//!     "createdAt": "2024-05-01T12:00:00Z"
//! }"#;
//!
//! let doc = transformer.transform_post_json(raw.as_bytes(), &ident, "3kq2", "bafyrei").unwrap();
//! assert_eq!(doc.doc_id(), "did:plc:alice_3kq2");
//! assert_eq!(doc.hashtag, Some(vec!["rust".to_string()]));
//! assert_eq!(doc.emoji, Some(vec!["🦀".to_string()]));
//! ```

#![warn(missing_docs)]

mod clock;
mod config;
mod emoji;
mod error;
mod hashtag;
mod post;
mod profile;
mod transformer;

pub use clock::{format_index_ts, FixedClock, SystemClock, INDEX_TS_FORMAT};
pub use config::TransformConfig;
pub use emoji::extract_emoji;
pub use error::TransformError;
pub use hashtag::extract_hashtags;
pub use post::transform_post;
pub use profile::transform_profile;
pub use transformer::Transformer;
