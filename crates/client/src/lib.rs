#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Event lookup client for the [Trailkit](https://trailkit.dev)
//! audit-log service.
//!
//! The client submits [LookupRequest](trailkit_core::LookupRequest)
//! queries over a pluggable [Transport] and drives pagination with
//! continuation tokens. It performs only fail-fast local validation;
//! service errors are surfaced verbatim as distinct [Error] kinds and
//! never retried here. Transport implementations own retry of
//! connectivity failures.

mod client;
mod error;
mod http_transport;
mod metadata;
mod origin;
mod pages;
mod transport;

pub use client::TrailClient;
pub use error::Error;
pub use http_transport::HttpTransport;
pub use metadata::{
    ResponseMetadata, METADATA_CACHE_CAPACITY, METADATA_CACHE_RETENTION,
};
pub use origin::Origin;
pub use pages::EventPages;
pub use transport::{
    Transport, TransportRequest, TransportResponse, TARGET_HEADER,
    WIRE_CONTENT_TYPE,
};

pub use trailkit_core as model;

/// Result type for the client.
pub type Result<T> = std::result::Result<T, Error>;
