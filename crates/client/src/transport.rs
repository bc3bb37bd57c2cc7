//! Transport abstraction for submitting service calls.

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::{header::CONTENT_TYPE, Method, StatusCode, Uri};
use std::{collections::HashMap, sync::Arc};

/// MIME type for request and response bodies.
pub const WIRE_CONTENT_TYPE: &str = "application/x-trail-json-1.1";

/// Header naming the operation a request targets.
pub const TARGET_HEADER: &str = "x-trail-target";

/// Header carrying the service-assigned request identifier.
pub(crate) const REQUEST_ID_HEADER: &str = "x-trail-request-id";

/// Request submitted to the service by a transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Request method.
    pub method: Method,
    /// Request URI.
    pub uri: Uri,
    /// Request headers.
    pub headers: HashMap<String, Vec<String>>,
    /// Request body.
    pub body: Vec<u8>,
}

impl TransportRequest {
    /// Create a POST request with a JSON body for a named
    /// operation.
    pub fn operation(uri: Uri, target: &str, body: Vec<u8>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            CONTENT_TYPE.as_str().to_owned(),
            vec![WIRE_CONTENT_TYPE.to_owned()],
        );
        headers.insert(TARGET_HEADER.to_owned(), vec![target.to_owned()]);
        Self {
            method: Method::POST,
            uri,
            headers,
            body,
        }
    }

    /// First value of a named header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(|value| value.as_str())
    }

    /// Operation this request targets.
    pub fn target(&self) -> Option<&str> {
        self.header(TARGET_HEADER)
    }
}

/// Response returned from the service by a transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// Response body.
    pub body: Bytes,
}

impl TransportResponse {
    /// First value of a named header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(|value| value.as_str())
    }

    /// Extract the content type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Whether the content type declares a JSON body.
    pub fn is_json(&self) -> bool {
        self.content_type()
            .map(|content_type| {
                content_type == WIRE_CONTENT_TYPE
                    || content_type.starts_with("application/json")
            })
            .unwrap_or_default()
    }

    /// Service-assigned identifier for the handled request.
    pub fn service_request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID_HEADER)
    }
}

/// Generic transport for service calls.
///
/// Implementations own transport-level concerns: connection
/// management, request signing and retry of connectivity
/// failures per their own policy. Service-level errors are
/// returned as ordinary responses and are never retried by a
/// transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit a request and wait for the response.
    async fn call(&self, request: TransportRequest)
        -> Result<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn call(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse> {
        (**self).call(request).await
    }
}
