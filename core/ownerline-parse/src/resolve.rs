//! Person name-order rules.
//!
//! Rules run in the order of [`RULES`]; the first rule whose predicate
//! applies decides the outcome. A segment no rule claims is
//! [`ReasonCode::UnparsablePersonSegment`].

use ownerline_model::{Person, ReasonCode};

/// Result of a rule that applied to a segment.
pub type RuleOutcome = Result<Person, ReasonCode>;

/// A name-order rule: `None` when the rule does not apply.
pub type NameRule = fn(segment: &str, prior_last_name: Option<&str>) -> Option<RuleOutcome>;

/// The rule chain in priority order.
pub const RULES: &[(&str, NameRule)] = &[
    ("comma_form", comma_form),
    ("inherited_surname", inherited_surname),
    ("uppercase_surname_first", uppercase_surname_first),
    ("western_order", western_order),
];

/// Resolves a person segment. `prior_last_name` is the surname of the
/// previous person in the same line, if any.
pub fn resolve_person(segment: &str, prior_last_name: Option<&str>) -> RuleOutcome {
    for (name, rule) in RULES {
        if let Some(outcome) = rule(segment, prior_last_name) {
            tracing::trace!(rule = name, segment, "name rule applied");
            return outcome;
        }
    }
    Err(ReasonCode::UnparsablePersonSegment)
}

/// `LAST, FIRST [MIDDLE...]`.
pub fn comma_form(segment: &str, _prior_last_name: Option<&str>) -> Option<RuleOutcome> {
    let (last, given) = segment.split_once(',')?;
    let last = last.split_whitespace().collect::<Vec<_>>().join(" ");
    let given: Vec<&str> = given
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    let Some((first, middle)) = given.split_first() else {
        return Some(Err(ReasonCode::MissingFirstOrLast));
    };
    Some(build(first, &last, middle, ReasonCode::MissingFirstOrLast))
}

/// `FIRST [MIDDLE]` sharing the previous person's surname.
pub fn inherited_surname(segment: &str, prior_last_name: Option<&str>) -> Option<RuleOutcome> {
    let last = prior_last_name?;
    let tokens = tokens(segment);
    if tokens.len() > 2 {
        return None;
    }
    let Some((first, middle)) = tokens.split_first() else {
        return Some(Err(ReasonCode::MissingFirstName));
    };
    Some(build(first, last, middle, ReasonCode::MissingFirstName))
}

/// `LAST FIRST [MIDDLE...]` when every token is uppercase.
pub fn uppercase_surname_first(segment: &str, _prior_last_name: Option<&str>) -> Option<RuleOutcome> {
    let tokens = tokens(segment);
    if tokens.len() < 2 || !tokens.iter().all(|t| is_uppercase(t)) {
        return None;
    }
    Some(build(tokens[1], tokens[0], &tokens[2..], ReasonCode::MissingFirstOrLast))
}

/// `FIRST [MIDDLE...] LAST`.
pub fn western_order(segment: &str, _prior_last_name: Option<&str>) -> Option<RuleOutcome> {
    let tokens = tokens(segment);
    if tokens.len() < 2 {
        return None;
    }
    let last = tokens[tokens.len() - 1];
    let middle = &tokens[1..tokens.len() - 1];
    Some(build(tokens[0], last, middle, ReasonCode::MissingFirstOrLast))
}

fn tokens(segment: &str) -> Vec<&str> {
    segment.split_whitespace().collect()
}

// Digits and punctuation do not count against an uppercase token.
fn is_uppercase(token: &str) -> bool {
    !token.chars().any(char::is_lowercase)
}

fn build(first: &str, last: &str, middle: &[&str], reason: ReasonCode) -> RuleOutcome {
    let middle = middle.join(" ");
    Person::new(first, last, Some(&middle)).map_err(|_| reason)
}
