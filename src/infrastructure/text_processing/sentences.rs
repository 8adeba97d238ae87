/// Splits text into sentences on terminal punctuation followed by
/// whitespace or end of input. A terminator inside a token (`3.14`,
/// `v1.2.3`) does not end a sentence. Sentences are returned trimmed, in
/// source order.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, ch)) = iter.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }

        let at_boundary = match iter.peek() {
            Some((_, next)) => next.is_whitespace(),
            None => true,
        };

        if at_boundary {
            let end = i + ch.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
