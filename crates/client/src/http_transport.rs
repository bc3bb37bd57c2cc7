//! HTTP transport implementation.

use crate::{Result, Transport, TransportRequest, TransportResponse};
use async_trait::async_trait;
use std::{collections::HashMap, time::Duration};

/// Transport that submits calls over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub fn new() -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .read_timeout(Duration::from_millis(15000))
            .connect_timeout(Duration::from_millis(5000))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.uri.to_string());
        for (name, values) in &request.headers {
            for value in values {
                builder = builder.header(name, value);
            }
        }
        let response = builder.body(request.body).send().await?;

        let status = response.status();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                let entry = headers
                    .entry(name.as_str().to_owned())
                    .or_insert_with(Vec::new);
                entry.push(value.to_owned());
            }
        }
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
