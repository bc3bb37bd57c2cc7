//! Identifiers for snapshots of the event log.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Constraint for snapshot identifiers.
const SNAPSHOT_ID_CONSTRAINT: &str = "^s-[0-9a-f]{10}$";

/// Length of the hexadecimal portion of a snapshot identifier.
const SNAPSHOT_ID_HEX_LEN: usize = 10;

/// Identifier for a snapshot of the event log.
///
/// Identifiers are the letter `s`, a hyphen and ten lowercase
/// hexadecimal digits. Parsing rejects anything else so an
/// identifier decoded from a service response is always well
/// formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnapshotId(String);

impl SnapshotId {
    /// String slice of this identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SnapshotId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = Error::InvalidField {
            field: "snapshot_id",
            constraint: SNAPSHOT_ID_CONSTRAINT,
        };
        let Some(digits) = value.strip_prefix("s-") else {
            return Err(invalid);
        };
        let well_formed = digits.len() == SNAPSHOT_ID_HEX_LEN
            && digits.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
        if well_formed {
            Ok(Self(value.to_owned()))
        } else {
            Err(invalid)
        }
    }
}

impl TryFrom<String> for SnapshotId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SnapshotId> for String {
    fn from(value: SnapshotId) -> Self {
        value.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of deleting a snapshot of the event log.
///
/// Value object decoded from the delete snapshot response; the
/// identifier is either well formed or absent, never partially
/// set. Callers cache and deduplicate these by value so equality
/// and hashing are field based and a clone shares no storage
/// with the original.
#[derive(
    Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeletedSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_id: Option<SnapshotId>,
}

impl DeletedSnapshot {
    /// Create with a snapshot identifier.
    pub fn new(snapshot_id: SnapshotId) -> Self {
        Self {
            snapshot_id: Some(snapshot_id),
        }
    }

    /// Identifier of the deleted snapshot.
    pub fn snapshot_id(&self) -> Option<&SnapshotId> {
        self.snapshot_id.as_ref()
    }

    /// Set the identifier from a string, validating it first.
    ///
    /// When validation fails the current value is left
    /// unchanged.
    pub fn set_snapshot_id(&mut self, value: &str) -> Result<()> {
        self.snapshot_id = Some(value.parse()?);
        Ok(())
    }

    /// Clear the identifier.
    pub fn clear_snapshot_id(&mut self) {
        self.snapshot_id = None;
    }
}
