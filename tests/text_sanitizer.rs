use redraft::infrastructure::text_processing::collapse_whitespace;

#[test]
fn given_page_text_with_newlines_and_runs_when_collapsing_then_yields_single_spaced_text() {
    let page = "Intro text.\n\nMore   text.";

    assert_eq!(collapse_whitespace(page), "Intro text. More text.");
}

#[test]
fn given_padded_text_when_collapsing_then_trims_leading_and_trailing_whitespace() {
    assert_eq!(collapse_whitespace("  hello world \n"), "hello world");
}

#[test]
fn given_word_hyphenated_across_lines_when_collapsing_then_rejoins_the_word() {
    let page = "The experi-\nment succeeded.";

    assert_eq!(collapse_whitespace(page), "The experiment succeeded.");
}

#[test]
fn given_empty_text_when_collapsing_then_returns_empty_string() {
    assert_eq!(collapse_whitespace(""), "");
    assert_eq!(collapse_whitespace("   \n\t "), "");
}
