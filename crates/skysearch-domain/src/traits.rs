//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the transforms and the
//! environment they run in. Implementations live in other crates.

use chrono::{DateTime, Utc};

/// Source of the current time
///
/// Implemented by `skysearch-transform` (`SystemClock`, `FixedClock`).
/// Documents are stamped through this trait so tests can pin the index
/// timestamp.
pub trait Clock {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}
