use std::sync::Arc;

use crate::{
    Dictionary, DictionaryEntry, EntryKind, EqualityChecker, EqualityConfig, IgnoreList, Warning,
};

const QUEUE: &str = "The process running on the remote host will pop a job off the queue.";

fn check_with(ignore: IgnoreList, text: &str) -> Vec<String> {
    EqualityChecker::new()
        .with_ignore_list(ignore)
        .check_text(text)
        .iter()
        .map(Warning::to_string)
        .collect()
}

#[test]
fn unignored_terms_warn() {
    assert_eq!(
        check_with(IgnoreList::new(), QUEUE),
        vec![
            "1:35-1:39: `host` may be insensitive, use `presenter`, `entertainer` instead",
            "1:45-1:48: `pop` may be insensitive, use `parent` instead",
        ]
    );
}

#[test]
fn ignored_terms_are_skipped() {
    let ignore = IgnoreList::new()
        .with("host", "a computer server")
        .with("pop", "operating on a data structure");
    assert!(check_with(ignore, QUEUE).is_empty());
}

#[test]
fn only_ignored_terms_are_skipped() {
    let ignore = IgnoreList::new().with("pop", "operating on a data structure");
    assert_eq!(
        check_with(ignore, QUEUE),
        vec!["1:35-1:39: `host` may be insensitive, use `presenter`, `entertainer` instead"]
    );

    let ignore = IgnoreList::new().with("host", "a computer server");
    assert_eq!(
        check_with(ignore, QUEUE),
        vec!["1:45-1:48: `pop` may be insensitive, use `parent` instead"]
    );
}

#[test]
fn ignoring_is_per_term_not_per_entry() {
    // "hostess" shares an entry with "host" but is not ignored by it
    let ignore = IgnoreList::new().with("host", "a computer server");
    assert_eq!(
        check_with(ignore, "The hostess waved."),
        vec!["1:5-1:12: `hostess` may be insensitive, use `presenter`, `entertainer` instead"]
    );
}

#[test]
fn ignored_terms_match_normalized() {
    let ignore = IgnoreList::new().with("bipolar", "magnetism");
    assert!(check_with(ignore.clone(), "Two bi-polar magnets.").is_empty());
    assert!(check_with(ignore, "Two BIPOLAR magnets.").is_empty());

    let ignore = IgnoreList::new().with("mentally ill", "quoted from a source");
    assert!(check_with(ignore, "Eric is Mentally ill.").is_empty());
}

#[test]
fn ignored_phrase_still_consumes_its_tokens() {
    let dictionary = Dictionary::from_entries(vec![
        DictionaryEntry::new("ill", EntryKind::Simple, ["ill"], ["unwell"]),
        DictionaryEntry::new("mentally-ill", EntryKind::Simple, ["mentally ill"], ["unwell"]),
    ])
    .unwrap();
    let checker = EqualityChecker::with_dictionary(Arc::new(dictionary))
        .with_ignore_list(IgnoreList::new().with("mentally ill", "quoted from a source"));

    assert!(checker.check_text("Eric is mentally ill.").is_empty());
    assert_eq!(checker.check_text("Eric is ill.").len(), 1);
}

#[test]
fn ignore_list_is_monotonic() {
    let text = "Her bike, his bicycle. The host will pop the master. Slaves are lame.";
    let terms = ["his", "host", "pop", "master", "lame"];

    let mut ignore = IgnoreList::new();
    let mut previous = check_with(ignore.clone(), text);
    for term in terms {
        ignore.insert(term, "test");
        let current = check_with(ignore.clone(), text);
        assert!(
            current.iter().all(|w| previous.contains(w)),
            "ignoring {term} produced a new warning: {current:?} vs {previous:?}"
        );
        assert!(current.len() < previous.len(), "ignoring {term} changed nothing");
        previous = current;
    }
}

#[test]
fn ignored_relational_side_never_resolves() {
    let ignore = IgnoreList::new().with("slaves", "historical quotation");
    assert!(check_with(ignore.clone(), "Slaves. Master.").is_empty());
    assert_eq!(check_with(ignore, "Slaves. Master. A slave.").len(), 1);
}

#[test]
fn config_drives_the_ignore_list() {
    let config = EqualityConfig::from_json_str(
        r#"{ "ignoreTerms": { "host": "a computer server", "pop": "operating on a data structure" } }"#,
    )
    .unwrap();
    let warnings = EqualityChecker::from_config(&config).check_text(QUEUE);
    assert!(warnings.is_empty());
}
