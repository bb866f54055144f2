//! Conversion tests in both directions.

use dramatis::foundation::{Character, Roster};
use dramatis::mentions::{mentions_to_references, references_to_mentions};

fn story_roster() -> Roster {
    Roster::from_characters(vec![
        Character::new(1, "John Doe").with_alias("Johnny, JD"),
        Character::new(2, "Mary Smith"),
        Character::new(3, "Robert Johnson").with_alias("Bob, Bobby"),
    ])
}

#[test]
fn unknown_mentions_pass_through_verbatim() {
    let text = "@Nobody was here";
    assert_eq!(mentions_to_references(text, &story_roster()), text);
}

#[test]
fn longest_match_preference() {
    let roster = Roster::from_characters(vec![
        Character::new(1, "John"),
        Character::new(2, "John Doe"),
    ]);
    assert_eq!(
        mentions_to_references("@John Doe went home", &roster),
        "[char:2] went home"
    );
    assert_eq!(
        mentions_to_references("@John went home", &roster),
        "[char:1] went home"
    );
}

#[test]
fn alias_mentions_resolve() {
    let roster = Roster::from_characters(vec![
        Character::new(1, "John Doe").with_aliases(["Johnny", "JD"]),
    ]);
    assert_eq!(mentions_to_references("@Johnny left", &roster), "[char:1] left");
    assert_eq!(mentions_to_references("@jd left", &roster), "[char:1] left");
}

#[test]
fn end_to_end_scenario() {
    let roster = Roster::from_characters(vec![
        Character::new(1, "John Doe"),
        Character::new(2, "Mary Smith"),
    ]);
    let original = "@John Doe went to the store with @Mary Smith";

    let encoded = mentions_to_references(original, &roster);
    assert_eq!(encoded, "[char:1] went to the store with [char:2]");

    let decoded = references_to_mentions(&encoded, &roster);
    assert_eq!(decoded, original);
}

#[test]
fn unknown_reference_preserved_for_empty_roster() {
    assert_eq!(
        references_to_mentions("[char:999] arrived", &Roster::new()),
        "[char:999] arrived"
    );
}

#[test]
fn unknown_reference_preserved_for_partial_roster() {
    // A partial roster (one story's characters) while the text references
    // another scope's character.
    let result = references_to_mentions("[char:1] met [char:999]", &story_roster());
    assert_eq!(result, "@John Doe met [char:999]");
}

#[test]
fn second_mention_pass_changes_nothing() {
    let roster = story_roster();
    let encoded = mentions_to_references("@Bobby and @Mary Smith met @Stranger", &roster);
    assert_eq!(encoded, "[char:3] and [char:2] met @Stranger");
    assert_eq!(mentions_to_references(&encoded, &roster), encoded);
}

#[test]
fn mixed_text_encodes_only_the_mentions() {
    let roster = story_roster();
    let result = mentions_to_references("[char:2] spoke to @JD about @nothing", &roster);
    assert_eq!(result, "[char:2] spoke to [char:1] about @nothing");
}

#[test]
fn boundary_characters_survive_encoding() {
    let roster = story_roster();
    assert_eq!(
        mentions_to_references("@Bob, then @Mary Smith!", &roster),
        "[char:3], then [char:2]!"
    );
    // No left-context requirement: a mention can start mid-parenthesis.
    assert_eq!(mentions_to_references("(@Johnny)", &roster), "([char:1])");
}

#[test]
fn decode_uses_the_primary_name_not_aliases() {
    let roster = story_roster();
    assert_eq!(
        references_to_mentions("[char:3] waved", &roster),
        "@Robert Johnson waved"
    );
}
