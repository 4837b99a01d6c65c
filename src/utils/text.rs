/// True when any of `terms` occurs as a substring of `text`.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

/// True when `token` appears as a whole whitespace-separated word.
/// Substring checks are too eager for one-letter markers like "h" / "l".
pub fn has_token(text: &str, token: &str) -> bool {
    text.split_whitespace().any(|word| word == token)
}
