use crate::{InvalidOwner, Owner, Result};
use serde::{Deserialize, Serialize};

/// The resolved owners of one document, in first-seen order, plus every
/// segment that failed to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub owners: Vec<Owner>,
    pub invalid: Vec<InvalidOwner>,
}

impl Roster {
    /// Returns `true` if neither owners nor invalid segments were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty() && self.invalid.is_empty()
    }

    /// Returns `true` if any segment failed to resolve.
    #[must_use]
    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }

    /// Serializes the roster to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a roster from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
