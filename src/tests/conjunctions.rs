use crate::{EqualityChecker, Warning};

fn check(text: &str) -> Vec<String> {
    EqualityChecker::new()
        .check_text(text)
        .iter()
        .map(Warning::to_string)
        .collect()
}

#[test]
fn slash_pair_is_inclusive() {
    assert!(check("Her/his bicycle.").is_empty());
    assert!(check("Each rider checks his/her helmet.").is_empty());
}

#[test]
fn and_or_pairs_are_inclusive() {
    assert!(check("Her and his bicycle.").is_empty());
    assert!(check("Her or his bicycle.").is_empty());
    assert!(check("He or she will reply.").is_empty());
    assert!(check("Brothers and sisters are welcome.").is_empty());
}

#[test]
fn other_close_words_still_warn() {
    assert_eq!(
        check("Her bike, his bicycle."),
        vec![
            "1:1-1:4: `Her` may be insensitive, use `Their`, `Theirs`, `Them` instead",
            "1:11-1:14: `his` may be insensitive, use `their`, `theirs`, `them` instead",
        ]
    );
}

#[test]
fn punctuation_before_connector_breaks_the_pair() {
    assert_eq!(check("Her, or his bicycle.").len(), 2);
    assert_eq!(check("Her and then his bicycle.").len(), 2);
}

#[test]
fn pair_does_not_shield_a_third_term() {
    assert_eq!(
        check("Her or his bicycle, said he."),
        vec!["1:26-1:28: `he` may be insensitive, use `they`, `it` instead"]
    );
}

#[test]
fn slash_chains_are_inclusive() {
    assert!(check("Ask him/her/his team.").is_empty());
}

#[test]
fn compound_connectors_do_not_pair() {
    assert_eq!(check("He and/or she").len(), 2);
}

#[test]
fn pairing_applies_before_ignore_list() {
    let checker = EqualityChecker::new()
        .with_ignore_list(crate::IgnoreList::new().with("his", "possessive in quoted text"));
    // "his" is ignored, but it still forms an inclusive pair with "her"
    assert!(checker.check_text("Her or his bicycle.").is_empty());
    assert_eq!(checker.check_text("Her bike, his bicycle.").len(), 1);
}
