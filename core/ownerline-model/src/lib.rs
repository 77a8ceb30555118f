//! Owner roster model for ownerline.
//!
//! Defines the types produced when ownership text is resolved:
//! - [`Owner`] — a resolved identity, either a [`Person`] or a [`Company`]
//! - [`InvalidOwner`] — a segment that could not be resolved, with a [`ReasonCode`]
//! - [`DedupKey`] — case-insensitive identity used to suppress repeated owners
//! - [`Roster`] — the ordered owners plus the invalid list for one document
//! - [`PropertyOwners`] — a roster attached to a property as its current owner snapshot
//!
//! The JSON shapes of these types are the contract with downstream consumers.

mod owner;
mod roster;
mod snapshot;

pub use owner::{Company, DedupKey, InvalidOwner, Owner, Person, ReasonCode};
pub use roster::Roster;
pub use snapshot::{OwnerSnapshot, PropertyOwners};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur when constructing or decoding model values.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
