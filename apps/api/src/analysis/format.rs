//! Structural completeness of a resume: expected section headings and contact details.

use std::sync::LazyLock;

use regex::Regex;

const EXPECTED_SECTIONS: [&str; 4] = ["experience", "education", "skills", "projects"];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid regex")
});

/// 3-3-4 digit grouping with optional `-` or `.` separators.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("valid regex"));

/// Scores `text` from 0 to 100: the mean of the section ratio and the contact ratio.
pub fn analyze_format(text: &str) -> u8 {
    let lower = text.to_lowercase();

    let sections_found = EXPECTED_SECTIONS
        .iter()
        .filter(|section| lower.contains(*section))
        .count();
    let section_score = sections_found as f64 / EXPECTED_SECTIONS.len() as f64;

    let contact_patterns: [&Regex; 2] = [&*EMAIL_RE, &*PHONE_RE];
    let contacts_found = contact_patterns
        .iter()
        .filter(|re| re.is_match(text))
        .count();
    let contact_score = contacts_found as f64 / contact_patterns.len() as f64;

    ((section_score + contact_score) / 2.0 * 100.0).round() as u8
}
