use redraft::infrastructure::text_processing::{
    split_into_sentences, DuplicateDetector, TextCleaner,
};

const LOOSE_THRESHOLD: f64 = 0.5;

#[test]
fn given_terminal_punctuation_when_splitting_sentences_then_splits_on_each_terminator() {
    let text = "First sentence. Second sentence! Third sentence? Fourth";

    let sentences = split_into_sentences(text);

    assert_eq!(
        sentences,
        vec![
            "First sentence.",
            "Second sentence!",
            "Third sentence?",
            "Fourth"
        ]
    );
}

#[test]
fn given_period_inside_a_token_when_splitting_sentences_then_does_not_split() {
    let sentences = split_into_sentences("Pi is 3.14 exactly. Version v1.2 shipped.");

    assert_eq!(
        sentences,
        vec!["Pi is 3.14 exactly.", "Version v1.2 shipped."]
    );
}

#[test]
fn given_empty_text_when_detecting_duplicates_then_returns_empty_sequences() {
    let detector = DuplicateDetector::default();

    let report = detector.find_duplicates("");

    assert!(report.sentences.is_empty());
    assert!(report.groups.is_empty());
}

#[test]
fn given_text_without_duplicates_when_detecting_then_returns_no_groups() {
    let detector = DuplicateDetector::default();
    let text = "The cat sat on the mat. Quarterly revenue rose sharply. Bring an umbrella tomorrow.";

    let report = detector.find_duplicates(text);

    assert_eq!(report.sentences.len(), 3);
    assert!(report.groups.is_empty());
}

#[test]
fn given_repeated_sentence_when_detecting_then_groups_both_occurrences() {
    let detector = DuplicateDetector::default();
    let text = "The meeting is at noon. Lunch follows afterwards. The meeting is at noon.";

    let report = detector.find_duplicates(text);

    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].indices, vec![0, 2]);
}

#[test]
fn given_chained_similarity_when_detecting_then_grouping_is_transitive() {
    // A~B and B~C clear the threshold; A~C alone does not. Union-find still
    // puts all three in one group.
    let detector = DuplicateDetector::new(LOOSE_THRESHOLD);
    let text = "alpha beta gamma delta. alpha beta gamma epsilon. alpha beta epsilon zeta.";

    let report = detector.find_duplicates(text);

    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].indices, vec![0, 1, 2]);
}

#[test]
fn given_any_input_when_detecting_then_groups_are_disjoint_with_at_least_two_members() {
    let detector = DuplicateDetector::new(LOOSE_THRESHOLD);
    let text = "red green blue. red green blue. one two three. one two three. lone sentence here.";

    let report = detector.find_duplicates(text);

    let mut seen = std::collections::HashSet::new();
    for group in &report.groups {
        assert!(group.indices.len() >= 2);
        for index in &group.indices {
            assert!(seen.insert(*index), "index {index} appears in two groups");
        }
    }
    assert_eq!(report.groups.len(), 2);
}

#[test]
fn given_same_input_when_detecting_twice_then_reports_are_identical() {
    let detector = DuplicateDetector::default();
    let text = "Same words here. Same words here. Different closing thought.";

    let first = detector.find_duplicates(text);
    let second = detector.find_duplicates(text);

    assert_eq!(first, second);
}

#[test]
fn given_duplicate_groups_when_cleaning_then_keeps_only_the_first_occurrence() {
    let detector = DuplicateDetector::default();
    let cleaner = TextCleaner;
    let text = "The cat sat here. The dog ran away. The cat sat here.";

    let report = detector.find_duplicates(text);
    let cleaned = cleaner.clean(text, &report);

    assert_eq!(cleaned, "The cat sat here. The dog ran away.");
}

#[test]
fn given_ungrouped_sentences_when_cleaning_then_leaves_them_untouched() {
    let detector = DuplicateDetector::default();
    let cleaner = TextCleaner;
    let text = "Unique opening line. Another unique thought. A final unique remark.";

    let report = detector.find_duplicates(text);
    let cleaned = cleaner.clean(text, &report);

    assert_eq!(cleaned, text);
}

#[test]
fn given_cleaned_text_when_detecting_again_then_cleaning_is_idempotent() {
    let detector = DuplicateDetector::default();
    let cleaner = TextCleaner;
    let text = "Repeat me please. Something in between. Repeat me please. Repeat me please.";

    let report = detector.find_duplicates(text);
    let cleaned = cleaner.clean(text, &report);

    let second_report = detector.find_duplicates(&cleaned);
    assert!(second_report.groups.is_empty());
    assert_eq!(cleaner.clean(&cleaned, &second_report), cleaned);
}

#[test]
fn given_duplicates_in_the_middle_when_cleaning_then_spacing_of_retained_text_survives() {
    let detector = DuplicateDetector::default();
    let cleaner = TextCleaner;
    let text = "Keep this one. Drop the repeat. Drop the repeat. Keep the ending.";

    let report = detector.find_duplicates(text);
    let cleaned = cleaner.clean(text, &report);

    assert_eq!(cleaned, "Keep this one. Drop the repeat. Keep the ending.");
}
