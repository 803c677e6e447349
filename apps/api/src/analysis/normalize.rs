//! Text normalization shared by the vectorizer and the ATS scorer.

/// Lowercases `text`, replaces every character that is not a letter, digit or
/// whitespace with a space, and collapses whitespace runs to single spaces.
///
/// Lowercasing happens first so that characters whose lowercase form expands
/// into combining marks are stripped in the same pass, which keeps the function
/// idempotent.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
