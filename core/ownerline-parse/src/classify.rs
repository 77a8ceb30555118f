//! Company vs. person classification by whole-word keyword match.

use crate::{ParseError, Result};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase words that mark a segment as a legal entity or organization.
pub const DEFAULT_COMPANY_KEYWORDS: &[&str] = &[
    // corporate forms
    "inc", "incorporated", "corp", "corporation", "co", "company", "llc", "llp", "lp", "lllp",
    "pllc", "pc", "ltd", "limited", "plc", "holdings", "group", "enterprises",
    // trusts and estates
    "trust", "trustee", "trustees", "tr", "estate", "fund", "foundation",
    // partnerships and associations
    "alliance", "partnership", "partners", "association", "assn", "assoc", "society", "club",
    "council", "hoa", "condominium", "homeowners",
    // financial institutions
    "bank", "bancorp", "mortgage", "financial", "credit", "union", "federal", "realty",
    "properties", "property", "investments", "investment",
    // religious organizations
    "ministries", "ministry", "church", "diocese", "parish", "congregation", "temple",
    "fellowship",
    // public bodies
    "authority", "university", "school",
];

static DEFAULT_KEYWORDS: LazyLock<CompanyKeywords> = LazyLock::new(CompanyKeywords::default);

/// What a cleaned segment denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Company,
    Person,
}

/// Classifies a segment with the default keyword set.
pub fn classify(segment: &str) -> SegmentKind {
    DEFAULT_KEYWORDS.classify(segment)
}

/// A fixed set of lowercase company keywords.
#[derive(Debug, Clone)]
pub struct CompanyKeywords {
    words: HashSet<String>,
}

impl Default for CompanyKeywords {
    fn default() -> Self {
        Self {
            words: DEFAULT_COMPANY_KEYWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl CompanyKeywords {
    /// The shared default set.
    pub fn shared_default() -> &'static Self {
        &DEFAULT_KEYWORDS
    }

    /// Default keywords plus `extra`. Extra entries are lowercased and must
    /// consist of letters only.
    pub fn with_extra<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords = Self::default();
        for word in extra {
            let word = word.as_ref().trim();
            if word.is_empty() || !word.chars().all(char::is_alphabetic) {
                return Err(ParseError::InvalidKeyword(word.to_string()));
            }
            keywords.words.insert(word.to_lowercase());
        }
        Ok(keywords)
    }

    /// Returns `true` if `word` (already lowercase) is a keyword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns [`SegmentKind::Company`] iff some whole word of the lowercased
    /// segment is a keyword. Words are bounded by non-letters.
    pub fn classify(&self, segment: &str) -> SegmentKind {
        let lowered = segment.to_lowercase();
        let is_company = lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
            .any(|w| self.contains(w));
        if is_company {
            SegmentKind::Company
        } else {
            SegmentKind::Person
        }
    }
}
