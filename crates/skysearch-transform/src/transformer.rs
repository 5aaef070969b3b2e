//! Transformer facade: clock + config + both transforms

use crate::clock::SystemClock;
use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::post::transform_post;
use crate::profile::transform_profile;
use serde::de::DeserializeOwned;
use serde_json::Value;
use skysearch_domain::record::{PostRecord, ProfileRecord, POST_RECORD_TYPE, PROFILE_RECORD_TYPE};
use skysearch_domain::{Clock, Identity, PostDoc, ProfileDoc};
use tracing::warn;

/// Turns decoded or raw records into search documents
///
/// Holds no mutable state; a single instance can be shared across threads
/// when the clock is `Sync`.
#[derive(Debug, Clone)]
pub struct Transformer<C = SystemClock> {
    clock: C,
    config: TransformConfig,
}

impl Transformer<SystemClock> {
    /// Create a Transformer stamping documents with the wall clock
    pub fn new(config: TransformConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl Default for Transformer<SystemClock> {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}

impl<C: Clock> Transformer<C> {
    /// Create a Transformer with a specific time source
    pub fn with_clock(clock: C, config: TransformConfig) -> Self {
        Self { clock, config }
    }

    /// Active configuration
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Build a profile document
    pub fn transform_profile(&self, profile: &ProfileRecord, ident: &Identity, cid: &str) -> ProfileDoc {
        transform_profile(profile, ident, cid, &self.clock)
    }

    /// Build a post document
    pub fn transform_post(
        &self,
        post: &PostRecord,
        ident: &Identity,
        rkey: &str,
        cid: &str,
    ) -> PostDoc {
        transform_post(post, ident, rkey, cid, &self.clock)
    }

    /// Decode a raw JSON profile record and build its document
    pub fn transform_profile_json(
        &self,
        raw: &[u8],
        ident: &Identity,
        cid: &str,
    ) -> Result<ProfileDoc, TransformError> {
        let profile: ProfileRecord = self.decode(raw, PROFILE_RECORD_TYPE)?;
        Ok(self.transform_profile(&profile, ident, cid))
    }

    /// Decode a raw JSON post record and build its document
    pub fn transform_post_json(
        &self,
        raw: &[u8],
        ident: &Identity,
        rkey: &str,
        cid: &str,
    ) -> Result<PostDoc, TransformError> {
        let post: PostRecord = self.decode(raw, POST_RECORD_TYPE)?;
        Ok(self.transform_post(&post, ident, rkey, cid))
    }

    fn decode<T: DeserializeOwned>(&self, raw: &[u8], expected: &'static str) -> Result<T, TransformError> {
        if raw.len() > self.config.max_record_bytes {
            warn!(
                "Rejecting {} record of {} bytes (max: {})",
                expected,
                raw.len(),
                self.config.max_record_bytes
            );
            return Err(TransformError::RecordTooLarge(raw.len(), self.config.max_record_bytes));
        }

        let value: Value = serde_json::from_slice(raw)?;

        if self.config.strict_record_type {
            if let Some(found) = value.get("$type").and_then(Value::as_str) {
                if found != expected {
                    warn!("Rejecting record of type '{}', expected '{}'", found, expected);
                    return Err(TransformError::UnexpectedType {
                        expected,
                        found: found.to_string(),
                    });
                }
            }
        }

        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use skysearch_domain::{Did, Handle, SearchDocument};

    fn transformer() -> Transformer<FixedClock> {
        let clock = FixedClock::from_rfc3339("2006-01-02T15:04:05Z").unwrap();
        Transformer::with_clock(clock, TransformConfig::default())
    }

    fn alice() -> Identity {
        Identity::new(Did::new("did:plc:alice"), Handle::new("alice.test"))
    }

    #[test]
    fn test_transform_post_json() {
        let raw = br#"{
            "$type": "app.bsky.feed.post",
            "text": "hi #there",
            "createdAt": "2024-02-03T04:05:06Z",
            "langs": ["en"]
        }"#;

        let doc = transformer().transform_post_json(raw, &alice(), "3kabc", "bafy").unwrap();
        assert_eq!(doc.doc_id(), "did:plc:alice_3kabc");
        assert_eq!(doc.doc_index_ts, "2006-01-02T15:04:05.000Z");
        assert_eq!(doc.hashtag, Some(vec!["there".to_string()]));
        assert_eq!(doc.lang_code_iso2, Some(vec!["en".to_string()]));
    }

    #[test]
    fn test_transform_profile_json_without_type() {
        let raw = br#"{"displayName": "Alice"}"#;
        let doc = transformer().transform_profile_json(raw, &alice(), "bafy").unwrap();
        assert_eq!(doc.display_name.as_deref(), Some("Alice"));
        assert_eq!(doc.doc_id(), "did:plc:alice");
    }

    #[test]
    fn test_wrong_type_rejected_when_strict() {
        let raw = br#"{"$type": "app.bsky.actor.profile", "text": "x", "createdAt": "y"}"#;
        let result = transformer().transform_post_json(raw, &alice(), "r", "c");
        match result {
            Err(TransformError::UnexpectedType { expected, found }) => {
                assert_eq!(expected, "app.bsky.feed.post");
                assert_eq!(found, "app.bsky.actor.profile");
            }
            other => panic!("expected UnexpectedType, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_type_allowed_when_lenient() {
        let clock = FixedClock::from_rfc3339("2006-01-02T15:04:05Z").unwrap();
        let transformer = Transformer::with_clock(clock, TransformConfig::lenient());
        assert!(!transformer.config().strict_record_type);
        let raw = br#"{"$type": "app.bsky.actor.profile", "text": "x", "createdAt": "y"}"#;
        assert!(transformer.transform_post_json(raw, &alice(), "r", "c").is_ok());
    }

    #[test]
    fn test_oversize_record_rejected() {
        let config = TransformConfig {
            max_record_bytes: 16,
            ..TransformConfig::default()
        };
        let transformer = Transformer::with_clock(FixedClock::from_rfc3339("2006-01-02T15:04:05Z").unwrap(), config);
        let raw = br#"{"displayName": "A name that is long"}"#;

        let result = transformer.transform_profile_json(raw, &alice(), "c");
        assert!(matches!(result, Err(TransformError::RecordTooLarge(_, 16))));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let result = transformer().transform_post_json(b"{not json", &alice(), "r", "c");
        assert!(matches!(result, Err(TransformError::Decode(_))));
    }

    #[test]
    fn test_missing_required_field_is_decode_error() {
        let raw = br#"{"$type": "app.bsky.feed.post", "createdAt": "2024-01-01T00:00:00Z"}"#;
        let result = transformer().transform_post_json(raw, &alice(), "r", "c");
        assert!(matches!(result, Err(TransformError::Decode(_))));
    }

    #[test]
    fn test_default_transformer_uses_wall_clock() {
        let transformer: Transformer = Transformer::default();
        let doc = transformer.transform_profile(&ProfileRecord::default(), &alice(), "c");
        assert_ne!(doc.doc_index_ts, "2006-01-02T15:04:05.000Z");
        assert!(doc.doc_index_ts.ends_with('Z'));
    }
}
