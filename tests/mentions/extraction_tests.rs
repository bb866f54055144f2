//! Reference-id extraction tests.

use std::collections::HashSet;

use dramatis::foundation::CharacterId;
use dramatis::mentions::extract_reference_ids;

fn values(ids: HashSet<CharacterId>) -> Vec<i64> {
    let mut raw: Vec<i64> = ids.into_iter().map(CharacterId::value).collect();
    raw.sort_unstable();
    raw
}

#[test]
fn duplicates_collapse_to_a_set() {
    let ids = extract_reference_ids("[char:1] met [char:2], then [char:1] left");
    assert_eq!(values(ids), vec![1, 2]);
}

#[test]
fn no_references_yields_the_empty_set() {
    assert!(extract_reference_ids("").is_empty());
    assert!(extract_reference_ids("plain prose, no markup").is_empty());
}

#[test]
fn non_digit_interiors_never_match() {
    let ids = extract_reference_ids("[char:x] [char:1a] [char: 2] [char:]");
    assert!(ids.is_empty());
}

#[test]
fn adjacent_tokens_all_count() {
    let ids = extract_reference_ids("[char:1][char:2][char:3]");
    assert_eq!(values(ids), vec![1, 2, 3]);
}

#[test]
fn extraction_needs_no_roster() {
    // Ids referencing characters from any scope are reported as written.
    let ids = extract_reference_ids("[char:999999]");
    assert_eq!(values(ids), vec![999_999]);
}
