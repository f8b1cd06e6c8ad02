//! Sentence tokenization and cleanup for training corpora.
//!
//! Converts raw tweet text into the cleaned word sequences the chain trains
//! on: URL tokens are dropped, text is split into sentences on terminal
//! punctuation, and each word is lowercased and stripped down to ASCII
//! alphanumerics and apostrophes.

/// Characters that terminate a sentence.
const SENTENCE_ENDINGS: [char; 4] = ['.', '!', '?', ';'];

/// Extracts the `column`-th comma-separated field of `line`.
///
/// Naive CSV: no quoting or escaping. Returns `None` when the line has too
/// few fields.
pub fn extract_column(line: &str, column: usize) -> Option<&str> {
    line.split(',').nth(column)
}

/// Lowercases `word` and strips everything but ASCII alphanumerics and
/// apostrophes. Returns `None` when nothing survives.
pub fn clean_word(word: &str) -> Option<String> {
    let cleaned: String = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '\'')
        .collect();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Splits `text` into cleaned sentences ready for training.
///
/// URL tokens are dropped before sentence splitting so their dots and
/// slashes do not produce spurious sentences. Words that clean to nothing
/// and sentences left empty are elided, so every returned sentence has at
/// least one word.
pub fn sentences(text: &str) -> Vec<Vec<String>> {
    let without_urls: Vec<&str> = text
        .split_whitespace()
        .filter(|w| !w.starts_with("http://") && !w.starts_with("https://"))
        .collect();

    without_urls
        .join(" ")
        .split(|c| SENTENCE_ENDINGS.contains(&c))
        .map(|sentence| sentence.split_whitespace().filter_map(clean_word).collect())
        .filter(|sentence: &Vec<String>| !sentence.is_empty())
        .collect()
}
