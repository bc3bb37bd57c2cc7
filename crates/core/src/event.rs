//! Event records returned by a lookup.

use crate::UtcDateTime;
use serde::{Deserialize, Serialize};

/// Resource referenced by an event.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EventResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_name: Option<String>,
}

impl EventResource {
    /// Create a resource reference.
    pub fn new(resource_type: String, resource_name: String) -> Self {
        Self {
            resource_type: Some(resource_type),
            resource_name: Some(resource_name),
        }
    }

    /// Type of the resource.
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    /// Name of the resource.
    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }
}

/// Single recorded API call in the event log.
///
/// Events carry the actor identity, the time of the call, the
/// resources it touched and the raw record as delivered to the
/// log.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_time: Option<UtcDateTime>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    resources: Vec<EventResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_event: Option<String>,
}

impl Event {
    /// Create an event record.
    pub fn new(
        event_id: String,
        event_name: String,
        event_time: UtcDateTime,
    ) -> Self {
        Self {
            event_id: Some(event_id),
            event_name: Some(event_name),
            event_time: Some(event_time),
            ..Default::default()
        }
    }

    /// Identifier of the event.
    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    /// Name of the API call.
    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }

    /// Identity of the actor.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Set the actor identity.
    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    /// Time the event was recorded.
    pub fn event_time(&self) -> Option<&UtcDateTime> {
        self.event_time.as_ref()
    }

    /// Resources referenced by the event.
    pub fn resources(&self) -> &[EventResource] {
        self.resources.as_slice()
    }

    /// Set the referenced resources.
    pub fn set_resources(&mut self, resources: Vec<EventResource>) {
        self.resources = resources;
    }

    /// Raw record as delivered to the log.
    pub fn raw_event(&self) -> Option<&str> {
        self.raw_event.as_deref()
    }

    /// Set the raw record.
    pub fn set_raw_event(&mut self, raw_event: Option<String>) {
        self.raw_event = raw_event;
    }
}
