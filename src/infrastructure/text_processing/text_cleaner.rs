use std::collections::HashSet;

use crate::domain::DuplicateReport;

/// Collapses each duplicate group to its first occurrence.
///
/// Sentences outside every group are left untouched, as is all spacing
/// between retained sentences. Removing a sentence also removes the
/// whitespace run that followed it, so the surviving text keeps a single
/// separator where the duplicate used to sit. Re-running detection on the
/// output finds no further duplicates, which makes cleaning idempotent.
pub struct TextCleaner;

impl TextCleaner {
    pub fn clean(&self, text: &str, report: &DuplicateReport) -> String {
        let remove: HashSet<usize> = report
            .groups
            .iter()
            .flat_map(|g| g.indices[1..].iter().copied())
            .collect();

        if remove.is_empty() {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len());
        let mut cursor = 0;

        for (index, sentence) in report.sentences.iter().enumerate() {
            // Sentences were derived from this text in order, so searching
            // from the cursor lands on the right occurrence.
            let Some(relative) = text[cursor..].find(sentence.as_str()) else {
                continue;
            };
            let start = cursor + relative;
            let end = start + sentence.len();

            if remove.contains(&index) {
                result.push_str(&text[cursor..start]);
                cursor = skip_whitespace(text, end);
            } else {
                result.push_str(&text[cursor..end]);
                cursor = end;
            }
        }

        result.push_str(&text[cursor..]);
        result.trim().to_string()
    }
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}
