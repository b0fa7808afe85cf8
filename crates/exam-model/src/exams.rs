//! Exam code display names.
//!
//! Exam codes are catalog data; their display names are presentation
//! vocabulary. Codes without an entry here display as-is.

/// Known exam codes in display order.
pub const KNOWN_EXAMS: &[(&str, &str)] = &[
    ("lc", "Leaving Cert"),
    ("jc", "Junior Cert"),
    ("lb", "Leaving Cert Applied"),
];

/// Display label for an exam code, falling back to the code itself.
pub fn exam_label(code: &str) -> &str {
    KNOWN_EXAMS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, label)| *label)
}

/// Position of a code in the preferred display order. Unknown codes sort
/// after all known ones.
pub fn display_rank(code: &str) -> usize {
    KNOWN_EXAMS
        .iter()
        .position(|(c, _)| *c == code)
        .unwrap_or(KNOWN_EXAMS.len())
}
