//! Client for the event lookup service.

use crate::{
    metadata::MetadataCache, Error, EventPages, HttpTransport, Origin,
    ResponseMetadata, Result, Transport, TransportRequest,
    TransportResponse,
};
use http::{StatusCode, Uri};
use parking_lot::Mutex;
use serde::Deserialize;
use std::{fmt, sync::Arc};
use trailkit_core::{LookupPage, LookupRequest};
use uuid::Uuid;

/// Operation target for event lookup.
const LOOKUP_EVENTS_TARGET: &str = "Trailkit_20150601.LookupEvents";

/// Shape of a service error body.
#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(rename = "__type")]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
}

/// Client for the event lookup service.
///
/// Holds no state between calls beyond diagnostic response
/// metadata; the continuation token inside a request is the
/// entire pagination state, so independent queries may run
/// concurrently against one client.
pub struct TrailClient {
    origin: Origin,
    transport: Mutex<Option<Arc<dyn Transport>>>,
    metadata: MetadataCache,
}

impl fmt::Debug for TrailClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrailClient")
            .field("origin", &self.origin)
            .field("closed", &self.transport.lock().is_none())
            .finish()
    }
}

impl TrailClient {
    /// Create a client for an origin using the HTTP transport.
    pub fn new(origin: Origin) -> Result<Self> {
        Ok(Self::with_transport(
            origin,
            Box::new(HttpTransport::new()?),
        ))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(
        origin: Origin,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            origin,
            transport: Mutex::new(Some(Arc::from(transport))),
            metadata: Default::default(),
        }
    }

    /// Origin this client submits calls to.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Look up events matching a query.
    ///
    /// Each call retrieves at most one page. Pass the returned
    /// continuation token back in a follow-up request for the
    /// next page, or use [TrailClient::pages] to drive a whole
    /// pagination. The service throttles lookups to one per
    /// second per account; when the limit is exceeded the call
    /// fails with [Error::Throttled] and the caller owns the
    /// backoff.
    pub async fn lookup_events(
        &self,
        request: &LookupRequest,
    ) -> Result<LookupPage> {
        let transport = self.transport()?;

        let request_id = Uuid::new_v4();
        tracing::debug!(
            request_id = %request_id,
            origin = %self.origin,
            "lookup_events",
        );

        let uri: Uri = self.origin.url().as_str().parse()?;
        let body = serde_json::to_vec(request)?;
        let transport_request =
            TransportRequest::operation(uri, LOOKUP_EVENTS_TARGET, body);
        let response = transport.call(transport_request).await?;

        self.metadata.insert(
            request.clone(),
            ResponseMetadata::new(
                request_id,
                response.service_request_id().map(|id| id.to_owned()),
                response.status,
            ),
        );

        if response.status.is_success() {
            if !response.is_json() {
                return Err(Error::UnexpectedResponseCode(response.status));
            }
            Ok(serde_json::from_slice(&response.body)?)
        } else {
            Err(map_service_error(&response))
        }
    }

    /// Look up the most recent events with the default page
    /// size.
    ///
    /// Convenience form of [TrailClient::lookup_events] with the
    /// empty query.
    pub async fn lookup_events_default(&self) -> Result<LookupPage> {
        self.lookup_events(&LookupRequest::default()).await
    }

    /// Drive pagination over a logical query.
    pub fn pages(&self, request: LookupRequest) -> EventPages<'_> {
        EventPages::new(self, request)
    }

    /// Diagnostic metadata for a previously executed request.
    ///
    /// Metadata is retained briefly so query it soon after the
    /// call; returns `None` once evicted or never populated.
    pub fn response_metadata(
        &self,
        request: &LookupRequest,
    ) -> Option<ResponseMetadata> {
        self.metadata.get(request)
    }

    /// Shut down the client, releasing the transport.
    ///
    /// Drops the transport and whatever resources it holds, such
    /// as an HTTP connection pool. Calls already in flight run to
    /// completion; every call after shutdown fails with
    /// [Error::Closed]. Shutting down twice is a no-op.
    pub fn shutdown(&self) {
        self.transport.lock().take();
    }

    fn transport(&self) -> Result<Arc<dyn Transport>> {
        self.transport.lock().clone().ok_or(Error::Closed)
    }
}

/// Map an error response to an error kind.
fn map_service_error(response: &TransportResponse) -> Error {
    if response.status == StatusCode::TOO_MANY_REQUESTS {
        return Error::Throttled;
    }
    // Intermediaries may answer with HTML or plain text.
    if !response.is_json() {
        return Error::UnexpectedResponseCode(response.status);
    }
    match serde_json::from_slice::<ServiceError>(&response.body) {
        Ok(error) => {
            // Error codes may be namespaced, e.g. "trailkit#ThrottlingException".
            let code =
                error.code.rsplit('#').next().unwrap_or(error.code.as_str());
            match code {
                "ThrottlingException" => Error::Throttled,
                "TrailNotFoundException" => {
                    Error::TrailNotFound(error.message)
                }
                "InvalidNextTokenException" => {
                    Error::InvalidContinuationToken
                }
                "InvalidLookupAttributesException"
                | "InvalidTimeRangeException"
                | "InvalidMaxResultsException" => Error::InvalidRequest {
                    code: code.to_owned(),
                    message: error.message,
                },
                _ => Error::Service {
                    code: code.to_owned(),
                    message: error.message,
                },
            }
        }
        Err(_) => Error::UnexpectedResponseCode(response.status),
    }
}
