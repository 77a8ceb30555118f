use ownerline_model::{Company, InvalidOwner, Owner, Person, ReasonCode};
use ownerline_parse::{CompanyKeywords, OwnerResolver, ParseConfig, RosterBuilder, resolve_owners};
use pretty_assertions::assert_eq;

fn person(first: &str, last: &str, middle: Option<&str>) -> Owner {
    Person::new(first, last, middle).unwrap().into()
}

fn company(name: &str) -> Owner {
    Company::new(name).unwrap().into()
}

// ── Documented scenarios ─────────────────────────────────────────

#[test]
fn uppercase_joint_owners_share_surname() {
    let roster = resolve_owners(["SMITH JOHN & MARY"]);
    assert_eq!(
        roster.owners,
        vec![person("JOHN", "SMITH", None), person("MARY", "SMITH", None)]
    );
    assert!(roster.invalid.is_empty());
}

#[test]
fn comma_form_with_middle_initial() {
    let roster = resolve_owners(["DOE, JANE M"]);
    assert_eq!(roster.owners, vec![person("JANE", "DOE", Some("M"))]);
}

#[test]
fn company_is_kept_verbatim() {
    let roster = resolve_owners(["ABC HOLDINGS LLC"]);
    assert_eq!(roster.owners, vec![company("ABC HOLDINGS LLC")]);
}

#[test]
fn mixed_case_joint_owners_share_surname() {
    let roster = resolve_owners(["Robert Jones & Lisa"]);
    assert_eq!(
        roster.owners,
        vec![person("Robert", "Jones", None), person("Lisa", "Jones", None)]
    );
}

#[test]
fn lone_token_is_invalid() {
    let roster = resolve_owners(["X"]);
    assert!(roster.owners.is_empty());
    assert_eq!(
        roster.invalid,
        vec![InvalidOwner::new("X", ReasonCode::UnparsablePersonSegment)]
    );
}

#[test]
fn same_person_across_lines_is_kept_once() {
    let roster = resolve_owners(["SMITH JOHN", "SMITH, JOHN"]);
    assert_eq!(roster.owners, vec![person("JOHN", "SMITH", None)]);
    assert_eq!(roster.owners[0].dedup_key().as_str(), "person|john||smith");
}

#[test]
fn mixed_case_surname_first_stays_distinct() {
    // "Smith John" reads as first=Smith, last=John under the default order.
    let roster = resolve_owners(["Smith John", "SMITH, JOHN"]);
    assert_eq!(
        roster.owners,
        vec![person("Smith", "John", None), person("JOHN", "SMITH", None)]
    );
}

// ── Prior surname scope ──────────────────────────────────────────

#[test]
fn company_resets_prior_surname() {
    let roster = resolve_owners(["SMITH JOHN & ABC LLC & MARY"]);
    assert_eq!(
        roster.owners,
        vec![person("JOHN", "SMITH", None), company("ABC LLC")]
    );
    assert_eq!(
        roster.invalid,
        vec![InvalidOwner::new("MARY", ReasonCode::UnparsablePersonSegment)]
    );
}

#[test]
fn prior_surname_does_not_cross_lines() {
    let roster = resolve_owners(["SMITH JOHN", "MARY"]);
    assert_eq!(roster.owners, vec![person("JOHN", "SMITH", None)]);
    assert_eq!(
        roster.invalid,
        vec![InvalidOwner::new("MARY", ReasonCode::UnparsablePersonSegment)]
    );
}

#[test]
fn invalid_segment_keeps_previous_surname() {
    let roster = resolve_owners(["SMITH JOHN & DOE, & MARY"]);
    assert_eq!(
        roster.owners,
        vec![person("JOHN", "SMITH", None), person("MARY", "SMITH", None)]
    );
    assert_eq!(
        roster.invalid,
        vec![InvalidOwner::new("DOE,", ReasonCode::MissingFirstOrLast)]
    );
}

#[test]
fn inherited_surname_chains_through_segments() {
    let roster = resolve_owners(["JONES ALAN & BETH & CARL"]);
    assert_eq!(
        roster.owners,
        vec![
            person("ALAN", "JONES", None),
            person("BETH", "JONES", None),
            person("CARL", "JONES", None),
        ]
    );
}

#[test]
fn comma_segment_sets_prior_surname() {
    let roster = resolve_owners(["DOE, JANE AND JOHN"]);
    assert_eq!(
        roster.owners,
        vec![person("JANE", "DOE", None), person("JOHN", "DOE", None)]
    );
}

// ── Cleanup and invalid routing ──────────────────────────────────

#[test]
fn et_al_suffix_is_dropped() {
    let roster = resolve_owners(["SMITH JOHN ET AL"]);
    assert_eq!(roster.owners, vec![person("JOHN", "SMITH", None)]);
}

#[test]
fn et_al_segment_is_empty() {
    let roster = resolve_owners(["SMITH JOHN & ET AL"]);
    assert_eq!(roster.owners, vec![person("JOHN", "SMITH", None)]);
    assert_eq!(
        roster.invalid,
        vec![InvalidOwner::new("ET AL", ReasonCode::EmptySegment)]
    );
}

#[test]
fn periods_are_removed_before_resolution() {
    let roster = resolve_owners(["DOE, JANE M.", "A.B.C. CO."]);
    assert_eq!(
        roster.owners,
        vec![person("JANE", "DOE", Some("M")), company("ABC CO")]
    );
}

#[test]
fn invalid_entries_are_not_deduplicated() {
    let roster = resolve_owners(["X", "X & X"]);
    assert!(roster.owners.is_empty());
    assert_eq!(roster.invalid.len(), 3);
}

#[test]
fn no_lines_give_empty_roster() {
    let roster = resolve_owners(Vec::<String>::new());
    assert!(roster.is_empty());
}

// ── Deduplication and order ──────────────────────────────────────

#[test]
fn duplicates_within_a_line_are_dropped() {
    // The company resets the carried surname, so the repeat resolves identically.
    let roster = resolve_owners(["SMITH JOHN & ACME LLC & SMITH JOHN"]);
    assert_eq!(
        roster.owners,
        vec![person("JOHN", "SMITH", None), company("ACME LLC")]
    );
    assert!(roster.invalid.is_empty());
}

#[test]
fn repeated_comma_form_within_a_line_is_dropped() {
    let roster = resolve_owners(["DOE, JANE & DOE, JANE"]);
    assert_eq!(roster.owners, vec![person("JANE", "DOE", None)]);
    assert!(roster.invalid.is_empty());
}

#[test]
fn two_token_repeat_after_a_person_inherits_surname() {
    let roster = resolve_owners(["SMITH JOHN & SMITH JOHN"]);
    assert_eq!(
        roster.owners,
        vec![person("JOHN", "SMITH", None), person("SMITH", "SMITH", Some("JOHN"))]
    );
}

#[test]
fn company_dedup_ignores_case() {
    let roster = resolve_owners(["ABC HOLDINGS LLC", "Abc Holdings Llc"]);
    assert_eq!(roster.owners, vec![company("ABC HOLDINGS LLC")]);
}

#[test]
fn owners_follow_first_seen_order_across_lines() {
    let roster = resolve_owners(["DOE JANE & ABC LLC", "BROWN TOM", "DOE, JANE"]);
    assert_eq!(
        roster.owners,
        vec![
            person("JANE", "DOE", None),
            company("ABC LLC"),
            person("TOM", "BROWN", None),
        ]
    );
}

#[test]
fn builder_reports_whether_owner_was_added() {
    let mut builder = RosterBuilder::new();
    assert!(builder.push_owner(person("JOHN", "SMITH", None)));
    assert!(!builder.push_owner(person("john", "smith", None)));
    assert_eq!(builder.roster().owners.len(), 1);
}

// ── Resolver ─────────────────────────────────────────────────────

#[test]
fn resolver_does_not_share_state_between_documents() {
    let resolver = OwnerResolver::default();
    let first = resolver.resolve(["SMITH JOHN"]);
    let second = resolver.resolve(["SMITH JOHN"]);
    assert_eq!(first.owners, second.owners);
    assert_eq!(second.owners.len(), 1);
}

#[test]
fn resolver_uses_configured_keywords() {
    let config = ParseConfig {
        extra_company_keywords: vec!["cooperative".into()],
    };
    let resolver = OwnerResolver::from_config(&config).unwrap();
    let roster = resolver.resolve(["VALLEY COOPERATIVE"]);
    assert_eq!(roster.owners, vec![company("VALLEY COOPERATIVE")]);

    let default_roster = OwnerResolver::new(CompanyKeywords::default()).resolve(["VALLEY COOPERATIVE"]);
    assert_eq!(default_roster.owners, vec![person("COOPERATIVE", "VALLEY", None)]);
}
