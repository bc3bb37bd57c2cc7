#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Core model types for the [Trailkit](https://trailkit.dev) audit-log SDK.
//!
//! Defines the value objects exchanged with the event lookup
//! service. All types validate their constraints when they are
//! constructed so an invalid request or identifier can never be
//! observed; decoding a service response re-runs the same
//! validation on untrusted input.

mod date_time;
mod error;
mod event;
mod lookup;
mod snapshot;

pub use date_time::UtcDateTime;
pub use error::Error;
pub use event::{Event, EventResource};
pub use lookup::{
    AttributeKey, ContinuationToken, LookupAttribute, LookupPage,
    LookupRequest, LookupRequestBuilder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use snapshot::{DeletedSnapshot, SnapshotId};

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;
