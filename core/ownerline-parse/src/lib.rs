//! Resolution of free-text ownership lines into typed owner rosters.
//!
//! A document supplies zero or more raw name lines. Each line runs through
//! four stages:
//! 1. [`split`] divides the line on `&` and standalone `AND`.
//! 2. [`CompanyKeywords::classify`] marks a segment as a company or a person.
//! 3. [`resolve_person`] assigns first, middle and last names by an ordered
//!    chain of name-order rules, optionally inheriting the surname of the
//!    previous person in the same line.
//! 4. [`RosterBuilder`] deduplicates owners and collects invalid segments.
//!
//! State never crosses documents: every call to [`OwnerResolver::resolve`]
//! starts from an empty deduplication set.

mod classify;
mod config;
mod error;
mod resolve;
mod roster;
mod split;

pub use classify::{CompanyKeywords, DEFAULT_COMPANY_KEYWORDS, SegmentKind, classify};
pub use config::ParseConfig;
pub use error::{ParseError, Result};
pub use resolve::{
    NameRule, RULES, RuleOutcome, comma_form, inherited_surname, resolve_person,
    uppercase_surname_first, western_order,
};
pub use roster::{OwnerResolver, RosterBuilder};
pub use split::{clean_segment, split};

use ownerline_model::Roster;

/// Resolves one document's name lines with the default keyword set.
pub fn resolve_owners<I, S>(lines: I) -> Roster
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = RosterBuilder::new();
    for line in lines {
        builder.push_line(line.as_ref());
    }
    builder.finish()
}
