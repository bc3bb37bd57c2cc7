//! Diagnostic response metadata.

use http::StatusCode;
use parking_lot::Mutex;
use std::{
    collections::HashMap,
    time::{Duration, Instant},
};
use trailkit_core::{LookupRequest, UtcDateTime};
use uuid::Uuid;

/// Number of entries retained in the metadata cache.
pub const METADATA_CACHE_CAPACITY: usize = 50;

/// How long metadata for a completed request is retained.
pub const METADATA_CACHE_RETENTION: Duration = Duration::from_secs(60);

/// Diagnostic metadata for a completed request.
///
/// Not part of any operation result; retained for a short
/// period to help debug a service that is not acting as
/// expected, so query it soon after executing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    client_request_id: Uuid,
    service_request_id: Option<String>,
    status: StatusCode,
    received: UtcDateTime,
}

impl ResponseMetadata {
    pub(crate) fn new(
        client_request_id: Uuid,
        service_request_id: Option<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            client_request_id,
            service_request_id,
            status,
            received: UtcDateTime::now(),
        }
    }

    /// Identifier the client assigned to the request.
    pub fn client_request_id(&self) -> &Uuid {
        &self.client_request_id
    }

    /// Identifier the service assigned to the request.
    pub fn service_request_id(&self) -> Option<&str> {
        self.service_request_id.as_deref()
    }

    /// Status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Time the response was received.
    pub fn received(&self) -> &UtcDateTime {
        &self.received
    }
}

/// Bounded cache of response metadata keyed by the executed
/// request.
///
/// Entries expire after [METADATA_CACHE_RETENTION] and the
/// oldest entry is evicted once [METADATA_CACHE_CAPACITY] is
/// reached.
#[derive(Default)]
pub(crate) struct MetadataCache {
    entries: Mutex<HashMap<LookupRequest, (Instant, ResponseMetadata)>>,
}

impl MetadataCache {
    pub fn insert(&self, request: LookupRequest, metadata: ResponseMetadata) {
        let mut entries = self.entries.lock();
        entries.retain(|_, (at, _)| at.elapsed() < METADATA_CACHE_RETENTION);
        if entries.len() >= METADATA_CACHE_CAPACITY {
            let oldest = entries
                .iter()
                .min_by_key(|(_, (at, _))| *at)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                entries.remove(&key);
            }
        }
        entries.insert(request, (Instant::now(), metadata));
    }

    pub fn get(&self, request: &LookupRequest) -> Option<ResponseMetadata> {
        let entries = self.entries.lock();
        entries.get(request).and_then(|(at, metadata)| {
            (at.elapsed() < METADATA_CACHE_RETENTION)
                .then(|| metadata.clone())
        })
    }
}
