//! Consumer-side records that attach a roster to a property.
//!
//! Only the current owner snapshot is produced; dated historical
//! snapshots are left to whatever assembles the larger property record.

use crate::{InvalidOwner, Owner, Roster};
use serde::{Deserialize, Serialize};

/// The owners currently on record for a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSnapshot {
    pub owners: Vec<Owner>,
    pub invalid: Vec<InvalidOwner>,
}

impl From<Roster> for OwnerSnapshot {
    fn from(roster: Roster) -> Self {
        Self {
            owners: roster.owners,
            invalid: roster.invalid,
        }
    }
}

/// A property identifier with its current owner snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOwners {
    pub property_id: String,
    pub current: OwnerSnapshot,
}

impl PropertyOwners {
    pub fn new(property_id: impl Into<String>, roster: Roster) -> Self {
        Self {
            property_id: property_id.into(),
            current: roster.into(),
        }
    }
}
