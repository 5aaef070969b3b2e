//! Skysearch Domain Layer
//!
//! This crate holds the value types shared by every other skysearch crate:
//! who authored a record, what a decoded record looks like, and the flattened
//! documents handed to the search index.
//!
//! ## Key Concepts
//!
//! - **Identity**: an account identifier (DID) plus its handle, which may be
//!   flagged invalid by identity resolution
//! - **Records**: profile and post records as decoded from the network's
//!   lexicon JSON, including the embed, facet and label unions
//! - **Documents**: denormalized, index-ready views of a record, keyed by a
//!   URL-safe document id
//! - **Clock**: the time source used to stamp documents at index time
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Transformation logic lives in `skysearch-transform`
//! - Index clients, identity resolution and record fetching are external

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod identity;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use document::{PostDoc, ProfileDoc, SearchDocument};
pub use error::DomainError;
pub use identity::{Did, Handle, Identity};
pub use record::{Embed, Facet, FacetFeature, PostRecord, ProfileRecord, RecordLabels};
pub use traits::Clock;
