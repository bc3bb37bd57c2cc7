//! Query types for the paginated event lookup operation.

use crate::{Error, Event, Result, UtcDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of events in a lookup page when no page size is given.
pub const DEFAULT_PAGE_SIZE: u16 = 10;

/// Maximum number of events in a lookup page.
pub const MAX_PAGE_SIZE: u16 = 50;

/// Attributes an event lookup can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    /// Identifier of the event.
    EventId,
    /// Name of the API call.
    EventName,
    /// Identity of the actor.
    Username,
    /// Type of a referenced resource.
    ResourceType,
    /// Name of a referenced resource.
    ResourceName,
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EventId => "EventId",
            Self::EventName => "EventName",
            Self::Username => "Username",
            Self::ResourceType => "ResourceType",
            Self::ResourceName => "ResourceName",
        };
        write!(f, "{}", name)
    }
}

/// Single named filter for an event lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LookupAttribute {
    attribute_key: AttributeKey,
    attribute_value: String,
}

impl LookupAttribute {
    /// Create a lookup attribute.
    pub fn new(key: AttributeKey, value: impl Into<String>) -> Self {
        Self {
            attribute_key: key,
            attribute_value: value.into(),
        }
    }

    /// Attribute being filtered on.
    pub fn key(&self) -> AttributeKey {
        self.attribute_key
    }

    /// Value the attribute must equal.
    pub fn value(&self) -> &str {
        &self.attribute_value
    }
}

/// Opaque token identifying the next page of lookup results.
///
/// A token must be passed back unmodified to retrieve the page
/// it refers to; its content carries no meaning for callers.
/// The service contract does not specify what happens when a
/// token is combined with filters other than the ones that
/// produced it, so tokens should only be reused with the query
/// that issued them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    /// Create a token from its wire representation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// String slice of the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContinuationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContinuationToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Filtered, time-bounded search over the event log.
///
/// Build requests with [LookupRequest::builder]; validation runs
/// once when the request is built so an invalid combination of
/// fields is never observable. The default request is the empty
/// query returning the most recent events.
#[derive(
    Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct LookupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<UtcDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<UtcDateTime>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    lookup_attributes: Vec<LookupAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<ContinuationToken>,
}

impl LookupRequest {
    /// Builder for a lookup request.
    pub fn builder() -> LookupRequestBuilder {
        Default::default()
    }

    /// Start of the queried time range.
    pub fn start_time(&self) -> Option<&UtcDateTime> {
        self.start_time.as_ref()
    }

    /// End of the queried time range.
    pub fn end_time(&self) -> Option<&UtcDateTime> {
        self.end_time.as_ref()
    }

    /// Filter attribute for the lookup.
    pub fn attribute(&self) -> Option<&LookupAttribute> {
        self.lookup_attributes.first()
    }

    /// Requested page size bound.
    pub fn max_results(&self) -> Option<u16> {
        self.max_results
    }

    /// Effective page size after applying the service default.
    pub fn page_size(&self) -> u16 {
        self.max_results.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Continuation token carried by this request.
    pub fn next_token(&self) -> Option<&ContinuationToken> {
        self.next_token.as_ref()
    }

    /// Replace the continuation token.
    ///
    /// Used to advance a pagination; the token never takes part
    /// in build-time validation so the request stays valid.
    pub fn with_token(mut self, token: Option<ContinuationToken>) -> Self {
        self.next_token = token;
        self
    }
}

/// Builder for [LookupRequest].
///
/// Fields are assigned stepwise and validated exactly once in
/// [LookupRequestBuilder::build].
#[derive(Default, Debug)]
pub struct LookupRequestBuilder {
    start_time: Option<UtcDateTime>,
    end_time: Option<UtcDateTime>,
    attributes: Vec<LookupAttribute>,
    max_results: Option<u16>,
    next_token: Option<ContinuationToken>,
}

impl LookupRequestBuilder {
    /// Only return events recorded at or after this time.
    pub fn start_time(mut self, time: UtcDateTime) -> Self {
        self.start_time = Some(time);
        self
    }

    /// Only return events recorded at or before this time.
    pub fn end_time(mut self, time: UtcDateTime) -> Self {
        self.end_time = Some(time);
        self
    }

    /// Filter events on an attribute.
    ///
    /// The service accepts at most one attribute besides the
    /// time range; adding a second one fails the build.
    pub fn attribute(mut self, attribute: LookupAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Bound the number of events in the returned page.
    pub fn max_results(mut self, max_results: u16) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Continue a previous lookup from its continuation token.
    pub fn next_token(mut self, token: ContinuationToken) -> Self {
        self.next_token = Some(token);
        self
    }

    /// Validate the fields and build the request.
    pub fn build(self) -> Result<LookupRequest> {
        if self.attributes.len() > 1 {
            return Err(Error::TooManyLookupAttributes(self.attributes.len()));
        }
        if let (Some(start), Some(end)) = (&self.start_time, &self.end_time)
        {
            if end < start {
                return Err(Error::InvalidTimeRange {
                    start: start.clone(),
                    end: end.clone(),
                });
            }
        }
        if let Some(max_results) = self.max_results {
            if !(1..=MAX_PAGE_SIZE).contains(&max_results) {
                return Err(Error::InvalidPageSize(max_results));
            }
        }
        Ok(LookupRequest {
            start_time: self.start_time,
            end_time: self.end_time,
            lookup_attributes: self.attributes,
            max_results: self.max_results,
            next_token: self.next_token,
        })
    }
}

/// One page of lookup results.
///
/// Events are ordered most recent first, matching their arrival
/// at the log. A missing continuation token signals the end of
/// the results.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LookupPage {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<ContinuationToken>,
}

impl LookupPage {
    /// Create a page of results.
    pub fn new(
        events: Vec<Event>,
        next_token: Option<ContinuationToken>,
    ) -> Self {
        Self { events, next_token }
    }

    /// Events in this page.
    pub fn events(&self) -> &[Event] {
        self.events.as_slice()
    }

    /// Consume the page into its events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Token retrieving the page after this one.
    pub fn next_token(&self) -> Option<&ContinuationToken> {
        self.next_token.as_ref()
    }

    /// Whether this is the final page of the lookup.
    pub fn is_last(&self) -> bool {
        self.next_token.is_none()
    }
}
