use super::clock::Clock;
use chrono::NaiveDateTime;

/// Line that closes every entry and marks the append boundary
pub const ENTRY_SEPARATOR: &str = "---";

/// Render a journal entry stamped with `timestamp`.
///
/// ```text
/// [YYYY-MM-DD HH:MM] <entry_type>: <content>
///
/// Alternatives considered: <a>, <b>     (only when non-empty)
///
/// Confidence: <confidence>              (only when non-empty)
///
/// ---
///
/// ```
///
/// Every line is newline-terminated, so the output always ends with `"---\n\n"`
/// and consecutive entries in a log stay separated by a blank line.
pub fn format_entry_at(
    timestamp: NaiveDateTime,
    content: &str,
    entry_type: &str,
    alternatives: Option<&[String]>,
    confidence: Option<&str>,
) -> String {
    let mut lines = vec![
        format!("[{}] {entry_type}: {content}", timestamp.format("%Y-%m-%d %H:%M")),
        String::new(),
    ];

    if let Some(alternatives) = alternatives.filter(|a| !a.is_empty()) {
        lines.push(format!("Alternatives considered: {}", alternatives.join(", ")));
        lines.push(String::new());
    }

    if let Some(confidence) = confidence.filter(|c| !c.is_empty()) {
        lines.push(format!("Confidence: {confidence}"));
        lines.push(String::new());
    }

    lines.push(ENTRY_SEPARATOR.to_string());
    lines.push(String::new());

    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Render a journal entry stamped with the current time according to `clock`
pub fn format_entry(
    clock: &dyn Clock,
    content: &str,
    entry_type: &str,
    alternatives: Option<&[String]>,
    confidence: Option<&str>,
) -> String {
    format_entry_at(clock.now(), content, entry_type, alternatives, confidence)
}
