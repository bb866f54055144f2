//! Completion suggestion tests.

use dramatis::foundation::{Character, Roster};
use dramatis::mentions::{mention_in_progress, mentions_to_references, suggest_characters};

fn story_roster() -> Roster {
    Roster::from_characters(vec![
        Character::new(1, "John Doe"),
        Character::new(2, "Mary Smith"),
        Character::new(3, "Johnny Cash"),
    ])
}

#[test]
fn typing_flow_from_prefix_to_encoded_text() {
    let roster = story_roster();

    // The writer has typed up to "Meeting @Jo" with the cursor at the end.
    let draft = "Meeting @Jo";
    let prefix = mention_in_progress(draft, draft.len()).unwrap();
    assert_eq!(prefix.partial, "Jo");

    // The popup offers the matching characters...
    let names: Vec<&str> = suggest_characters(prefix.partial, &roster)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["John Doe", "Johnny Cash"]);

    // ...and the accepted completion encodes at save time.
    let completed = format!("{}{} arrives", &draft[..prefix.offset], "@John Doe");
    assert_eq!(
        mentions_to_references(&completed, &roster),
        "Meeting [char:1] arrives"
    );
}

#[test]
fn suggestions_sort_alphabetically() {
    let roster = story_roster();
    let names: Vec<&str> = suggest_characters("", &roster)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["John Doe", "Johnny Cash", "Mary Smith"]);
}

#[test]
fn filter_matches_any_part_of_the_name() {
    let roster = story_roster();
    let found = suggest_characters("cash", &roster);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Johnny Cash");
}

#[test]
fn no_mention_in_finished_text() {
    let text = "Meeting @John Doe arrives";
    assert!(mention_in_progress(text, text.len()).is_none());
}
