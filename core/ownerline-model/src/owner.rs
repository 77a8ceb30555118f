//! Resolved owner identities and the reasons a segment can fail to resolve.

use crate::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A natural person named on a property record.
///
/// `first_name` and `last_name` are never empty; use [`Person::new`] to
/// construct one from untrusted parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
}

impl Person {
    /// Builds a person, trimming every part. An empty middle name becomes `None`.
    pub fn new(first_name: &str, last_name: &str, middle_name: Option<&str>) -> Result<Self> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() {
            return Err(ModelError::EmptyField { field: "first_name" });
        }
        if last_name.is_empty() {
            return Err(ModelError::EmptyField { field: "last_name" });
        }
        let middle_name = middle_name
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_name,
        })
    }
}

/// A legal entity or organization named on a property record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

impl Company {
    /// Builds a company from its trimmed name.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyField { field: "name" });
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}

/// A resolved owner.
///
/// Serializes with an internal `type` tag:
/// `{"type": "person", "first_name": .., "last_name": .., "middle_name": ..}` or
/// `{"type": "company", "name": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Owner {
    Person(Person),
    Company(Company),
}

impl Owner {
    /// Returns the deduplication key for this owner.
    #[must_use]
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::for_owner(self)
    }

    /// Human-readable name: `FIRST [MIDDLE] LAST` for people, the name for companies.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Person(p) => match &p.middle_name {
                Some(middle) => format!("{} {} {}", p.first_name, middle, p.last_name),
                None => format!("{} {}", p.first_name, p.last_name),
            },
            Self::Company(c) => c.name.clone(),
        }
    }

    /// Returns `true` if this owner is a person.
    #[must_use]
    pub fn is_person(&self) -> bool {
        matches!(self, Self::Person(_))
    }

    /// Returns the person variant, if any.
    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Self::Person(p) => Some(p),
            Self::Company(_) => None,
        }
    }

    /// Returns the company variant, if any.
    pub fn as_company(&self) -> Option<&Company> {
        match self {
            Self::Company(c) => Some(c),
            Self::Person(_) => None,
        }
    }
}

impl From<Person> for Owner {
    fn from(person: Person) -> Self {
        Self::Person(person)
    }
}

impl From<Company> for Owner {
    fn from(company: Company) -> Self {
        Self::Company(company)
    }
}

/// Case-insensitive composite identity of an owner.
///
/// `company|<name>` or `person|<first>|<middle>|<last>`; an absent middle
/// name leaves its field empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DedupKey(String);

impl DedupKey {
    fn for_owner(owner: &Owner) -> Self {
        let key = match owner {
            Owner::Person(p) => format!(
                "person|{}|{}|{}",
                normalize(&p.first_name),
                p.middle_name.as_deref().map(normalize).unwrap_or_default(),
                normalize(&p.last_name),
            ),
            Owner::Company(c) => format!("company|{}", normalize(&c.name)),
        };
        Self(key)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(part: &str) -> String {
    part.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Why a segment could not be resolved into an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Nothing was left of the segment after cleanup.
    EmptySegment,
    /// The comma form or the default order left the first or last name empty.
    MissingFirstOrLast,
    /// An inherited surname was available but no given name was present.
    MissingFirstName,
    /// No name-order rule applied to the segment.
    UnparsablePersonSegment,
}

impl ReasonCode {
    /// The wire form of the reason code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptySegment => "empty_segment",
            Self::MissingFirstOrLast => "missing_first_or_last",
            Self::MissingFirstName => "missing_first_name",
            Self::UnparsablePersonSegment => "unparsable_person_segment",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A segment that could not be resolved, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidOwner {
    pub raw: String,
    pub reason: ReasonCode,
}

impl InvalidOwner {
    pub fn new(raw: impl Into<String>, reason: ReasonCode) -> Self {
        Self {
            raw: raw.into(),
            reason,
        }
    }
}
