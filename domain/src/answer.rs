//! Single-word answer handling for the AI operation.
//!
//! Pure text processing: building the prompt sent upstream and reducing the
//! upstream reply to one word. No I/O.

use crate::core::question::Question;

/// Returned when the upstream reply contains no usable word.
pub const FALLBACK_ANSWER: &str = "Unknown";

/// Build the prompt asking for a single-word answer.
pub fn single_word_prompt(question: &Question) -> String {
    format!(
        "Answer this question with a single word: {}",
        question.content().trim()
    )
}

/// Reduce a free-form reply to its first word.
///
/// Takes the first whitespace-delimited token and strips trailing ASCII
/// punctuation (`Paris.` → `Paris`). Falls back to [`FALLBACK_ANSWER`] when
/// nothing is left.
///
/// # Examples
///
/// ```
/// use bfhl_domain::answer::extract_single_word;
///
/// assert_eq!(extract_single_word("Paris."), "Paris");
/// assert_eq!(extract_single_word("Mumbai is the answer"), "Mumbai");
/// assert_eq!(extract_single_word("  \n"), "Unknown");
/// ```
pub fn extract_single_word(reply: &str) -> String {
    let word = reply
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches(|c: char| c.is_ascii_punctuation());

    if word.is_empty() {
        FALLBACK_ANSWER.to_string()
    } else {
        word.to_string()
    }
}
