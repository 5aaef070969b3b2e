//! Account identity: DID plus handle

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable account identifier (a DID such as `did:plc:abc123`)
///
/// Document ids are derived from the DID, so a parsed DID never contains a
/// slash or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Did(String);

impl Did {
    /// Wrap an identifier without validation
    ///
    /// Use this for values that already passed through identity resolution.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse and validate a DID string
    ///
    /// # Examples
    ///
    /// ```
    /// use skysearch_domain::Did;
    ///
    /// let did = Did::parse("did:plc:u5cwb2mwiv2bfq53cjufe6yn").unwrap();
    /// assert_eq!(did.as_str(), "did:plc:u5cwb2mwiv2bfq53cjufe6yn");
    /// assert!(Did::parse("did:web:example.com/path").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = |reason| DomainError::InvalidDid(s.to_string(), reason);

        let rest = s.strip_prefix("did:").ok_or_else(|| invalid("missing 'did:' prefix"))?;
        let (method, identifier) = rest
            .split_once(':')
            .ok_or_else(|| invalid("missing method separator"))?;

        if method.is_empty() || !method.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
            return Err(invalid("method must be lowercase alphanumeric"));
        }
        if identifier.is_empty() || identifier.ends_with(':') {
            return Err(invalid("empty method-specific identifier"));
        }
        if s.contains('/') {
            return Err(invalid("contains '/'"));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }

        Ok(Self(s.to_string()))
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Did {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Human-readable account handle (e.g. `alice.bsky.social`)
///
/// Stored exactly as resolved. The reserved value `handle.invalid` (matched
/// without regard to ASCII case) marks an account whose handle failed
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Reserved handle for accounts whose handle did not verify
    pub const INVALID: &'static str = "handle.invalid";

    /// Create a handle from its resolved string form
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The invalid-handle marker
    pub fn invalid() -> Self {
        Self(Self::INVALID.to_string())
    }

    /// Whether identity resolution flagged this handle as invalid
    pub fn is_invalid(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::INVALID)
    }

    /// Borrow the handle as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Handle {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Handle> for String {
    fn from(h: Handle) -> Self {
        h.0
    }
}

/// Resolved author of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account identifier
    pub did: Did,

    /// Account handle, possibly flagged invalid
    pub handle: Handle,
}

impl Identity {
    /// Create a new identity
    pub fn new(did: Did, handle: Handle) -> Self {
        Self { did, handle }
    }

    /// Handle string for indexing: empty when the handle is invalid
    pub fn indexable_handle(&self) -> String {
        if self.handle.is_invalid() {
            String::new()
        } else {
            self.handle.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dids() {
        assert!(Did::parse("did:plc:u5cwb2mwiv2bfq53cjufe6yn").is_ok());
        assert!(Did::parse("did:web:example.com").is_ok());
        assert!(Did::parse("did:web:localhost%3A1234").is_ok());
    }

    #[test]
    fn test_parse_invalid_dids() {
        assert!(Did::parse("").is_err());
        assert!(Did::parse("plc:abc").is_err());
        assert!(Did::parse("did:plc").is_err());
        assert!(Did::parse("did::abc").is_err());
        assert!(Did::parse("did:PLC:abc").is_err());
        assert!(Did::parse("did:plc:abc:").is_err());
        assert!(Did::parse("did:web:example.com/users").is_err());
        assert!(Did::parse("did:plc:ab c").is_err());
    }

    #[test]
    fn test_handle_keeps_case() {
        let handle = Handle::new("Alice.BSKY.social");
        assert_eq!(handle.as_str(), "Alice.BSKY.social");
        assert!(!handle.is_invalid());
    }

    #[test]
    fn test_invalid_handle() {
        assert!(Handle::invalid().is_invalid());
        assert!(Handle::new("Handle.Invalid").is_invalid());
        assert!(Handle::new("HANDLE.INVALID").is_invalid());
    }

    #[test]
    fn test_indexable_handle() {
        let did = Did::new("did:plc:abc");
        let ok = Identity::new(did.clone(), Handle::new("alice.test"));
        assert_eq!(ok.indexable_handle(), "alice.test");

        let bad = Identity::new(did, Handle::invalid());
        assert_eq!(bad.indexable_handle(), "");

        let mixed = Identity::new(Did::new("did:plc:abc"), Handle::new("Alice.Example.COM"));
        assert_eq!(mixed.indexable_handle(), "Alice.Example.COM");
    }

    #[test]
    fn test_handle_deserializes_verbatim() {
        let handle: Handle = serde_json::from_str("\"Bob.Test\"").unwrap();
        assert_eq!(handle.as_str(), "Bob.Test");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a parsed DID is always usable inside a document id
        #[test]
        fn test_parsed_did_has_no_slash(s in "did:[a-z]{1,5}:[a-zA-Z0-9./:% -]{1,24}") {
            if let Ok(did) = Did::parse(&s) {
                prop_assert!(!did.as_str().contains('/'));
                prop_assert!(!did.as_str().contains(' '));
                prop_assert_eq!(did.as_str(), s.as_str());
            }
        }

        /// Property: a handle keeps its string form and is only invalid
        /// when it spells the marker
        #[test]
        fn test_handle_round_trips(s in "[a-zA-Z]{1,10}\\.[a-zA-Z]{2,6}") {
            let handle = Handle::new(s.clone());
            prop_assert_eq!(handle.as_str(), s.as_str());
            prop_assert_eq!(handle.is_invalid(), s.eq_ignore_ascii_case(Handle::INVALID));
        }
    }
}
