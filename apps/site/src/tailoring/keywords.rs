//! Keyword extraction from pasted job requirements.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words too generic to say anything about the role.
pub const STOP_WORDS: &[&str] = &[
    "and",
    "the",
    "for",
    "with",
    "you",
    "your",
    "that",
    "are",
    "our",
    "this",
    "will",
    "have",
    "has",
    "need",
    "looking",
    "work",
    "team",
    "role",
    "job",
    "experience",
    "years",
];

/// Tokens of at least three characters. `+`, `#` and `.` stay inside a token so
/// "c++", "c#" and "next.js" survive intact.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9+#.]{3,}").unwrap());

/// Lower-cases `text`, pulls out every token, drops stop words and duplicates.
/// First-occurrence order is preserved; callers slice the front for "top" keywords.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();

    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !STOP_WORDS.contains(word))
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}
