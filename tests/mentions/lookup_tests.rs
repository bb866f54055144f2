//! Mentioned-character lookup over mixed text.

use dramatis::foundation::{Character, Roster};
use dramatis::mentions::find_mentioned_characters;

#[test]
fn mixed_format_lookup() {
    // Single-word mentions and reference tokens both count.
    let roster = Roster::from_characters(vec![
        Character::new(1, "John"),
        Character::new(2, "Mary Smith"),
    ]);
    let found = find_mentioned_characters("@John and [char:2]", &roster);
    let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["John", "Mary Smith"]);
}

#[test]
fn multi_word_mentions_only_match_by_reference() {
    let roster = Roster::from_characters(vec![
        Character::new(1, "John Doe"),
        Character::new(2, "Mary"),
    ]);
    // "@John Doe" contributes only the word "John", which is not a primary
    // name here; the same character is found once the text is encoded.
    assert!(find_mentioned_characters("@John Doe met nobody", &roster).is_empty());

    let found = find_mentioned_characters("[char:1] met @Mary", &roster);
    let ids: Vec<i64> = found.iter().map(|c| c.id.value()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn results_come_in_roster_order() {
    let roster = Roster::from_characters(vec![
        Character::new(3, "Charlie"),
        Character::new(1, "Alpha"),
        Character::new(2, "Bravo"),
    ]);
    let found = find_mentioned_characters("@Bravo before [char:3]", &roster);
    let ids: Vec<i64> = found.iter().map(|c| c.id.value()).collect();
    assert_eq!(ids, vec![3, 2]);
}

#[test]
fn each_character_appears_once() {
    let roster = Roster::from_characters(vec![Character::new(1, "John")]);
    let found = find_mentioned_characters("@John, [char:1], @john again", &roster);
    assert_eq!(found.len(), 1);
}

#[test]
fn empty_inputs_yield_nothing() {
    let roster = Roster::from_characters(vec![Character::new(1, "John")]);
    assert!(find_mentioned_characters("", &roster).is_empty());
    assert!(find_mentioned_characters("@John", &Roster::new()).is_empty());
}
