//! Roster assembly: deduplication and invalid-segment routing.

use crate::{CompanyKeywords, ParseConfig, Result, SegmentKind, clean_segment, resolve_person, split};
use ownerline_model::{Company, DedupKey, InvalidOwner, Owner, ReasonCode, Roster};
use std::collections::HashSet;
use tracing::debug;

/// Accumulates one document's roster, line by line.
///
/// The deduplication set lives as long as the builder; the prior surname
/// lives for a single [`push_line`](Self::push_line) call.
#[derive(Debug)]
pub struct RosterBuilder<'a> {
    keywords: &'a CompanyKeywords,
    seen: HashSet<DedupKey>,
    roster: Roster,
}

impl RosterBuilder<'static> {
    /// A builder using the default company keywords.
    pub fn new() -> Self {
        Self::with_keywords(CompanyKeywords::shared_default())
    }
}

impl Default for RosterBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RosterBuilder<'a> {
    pub fn with_keywords(keywords: &'a CompanyKeywords) -> Self {
        Self {
            keywords,
            seen: HashSet::new(),
            roster: Roster::default(),
        }
    }

    /// Processes one raw name line, segments left to right.
    pub fn push_line(&mut self, line: &str) {
        let mut prior_last_name: Option<String> = None;

        for raw in split(line) {
            let segment = clean_segment(&raw);
            if segment.is_empty() {
                self.push_invalid(raw, ReasonCode::EmptySegment);
                continue;
            }

            match self.keywords.classify(&segment) {
                SegmentKind::Company => {
                    prior_last_name = None;
                    match Company::new(&segment) {
                        Ok(company) => {
                            self.push_owner(company.into());
                        }
                        Err(_) => self.push_invalid(raw, ReasonCode::EmptySegment),
                    }
                }
                SegmentKind::Person => match resolve_person(&segment, prior_last_name.as_deref()) {
                    Ok(person) => {
                        prior_last_name = Some(person.last_name.clone());
                        self.push_owner(person.into());
                    }
                    Err(reason) => self.push_invalid(raw, reason),
                },
            }
        }
    }

    /// Appends `owner` unless an owner with the same key was already seen.
    /// Returns `true` if it was appended.
    pub fn push_owner(&mut self, owner: Owner) -> bool {
        let key = owner.dedup_key();
        if !self.seen.insert(key.clone()) {
            debug!(%key, "duplicate owner suppressed");
            return false;
        }
        debug!(%key, name = %owner.display_name(), "owner resolved");
        self.roster.owners.push(owner);
        true
    }

    /// Appends an invalid segment. Invalid entries are never deduplicated.
    pub fn push_invalid(&mut self, raw: impl Into<String>, reason: ReasonCode) {
        let invalid = InvalidOwner::new(raw, reason);
        debug!(raw = %invalid.raw, %reason, "segment not resolved");
        self.roster.invalid.push(invalid);
    }

    /// The roster accumulated so far.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn finish(self) -> Roster {
        self.roster
    }
}

/// Document-level entry point holding the configured keyword set.
#[derive(Debug, Clone, Default)]
pub struct OwnerResolver {
    keywords: CompanyKeywords,
}

impl OwnerResolver {
    pub fn new(keywords: CompanyKeywords) -> Self {
        Self { keywords }
    }

    pub fn from_config(config: &ParseConfig) -> Result<Self> {
        Ok(Self::new(config.company_keywords()?))
    }

    pub fn keywords(&self) -> &CompanyKeywords {
        &self.keywords
    }

    /// Resolves all name lines of one document. Each call starts with an
    /// empty deduplication set.
    pub fn resolve<I, S>(&self, lines: I) -> Roster
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = RosterBuilder::with_keywords(&self.keywords);
        for line in lines {
            builder.push_line(line.as_ref());
        }
        let roster = builder.finish();
        debug!(
            owners = roster.owners.len(),
            invalid = roster.invalid.len(),
            "document resolved"
        );
        roster
    }
}
