/*! Sentence splitting

Sentences end with the danda (`।`, U+0964), `?` or `!`.

[split_sentences] keeps the delimiter attached to the sentence it ends,
whereas [sentence_fragments] (used for counting) discards it.
!*/

/// Sentence-final delimiters.
pub const SENTENCE_DELIMITERS: &[char] = &['\u{0964}', '?', '!'];

#[inline]
pub fn is_delimiter(c: char) -> bool {
    SENTENCE_DELIMITERS.contains(&c)
}

/// Split `doc` into trimmed sentences, each one ending with its delimiter.
///
/// A trailing fragment without delimiter is kept if it is not blank.
/// Consecutive delimiters produce delimiter-only sentences (`"কি?!"` gives `"কি?"` and `"!"`):
/// filtering those out is up to the caller.
pub fn split_sentences(doc: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in doc.chars() {
        current.push(c);
        if is_delimiter(c) {
            sentences.push(current.trim().to_string());
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Non-blank fragments of `doc` between delimiters, delimiters excluded.
pub fn sentence_fragments(doc: &str) -> impl Iterator<Item = &str> {
    doc.split(SENTENCE_DELIMITERS)
        .filter(|fragment| !fragment.trim().is_empty())
}
