use crate::error::{ObsidianError, Result};
use std::fmt;
use std::str::FromStr;

/// Characters that would let an agent name escape its log file, in the order
/// they are checked
pub const INVALID_AGENT_CHARS: [char; 5] = ['/', '\\', '\0', '\n', '\r'];

/// How sure the agent is about a journaled decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// high
    High,
    /// medium
    Medium,
    /// low
    Low,
}

impl Confidence {
    /// Lowercase name as written into entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ObsidianError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            other => Err(ObsidianError::invalid_argument(format!(
                "confidence must be 'high', 'medium', or 'low', got: {other}"
            ))),
        }
    }
}

/// Check journal entry arguments before any side effect.
///
/// Fails with [`ObsidianError::InvalidArgument`] when `content`, `entry_type`
/// or `agent` is empty or whitespace-only, when `agent` contains one of
/// [`INVALID_AGENT_CHARS`] (the first one found in that order is reported),
/// or when `confidence` is non-empty and not `high`/`medium`/`low`. An empty
/// `confidence` counts as absent.
pub fn validate_entry(
    content: &str,
    entry_type: &str,
    agent: &str,
    confidence: Option<&str>,
) -> Result<()> {
    if content.trim().is_empty() {
        return Err(ObsidianError::invalid_argument(
            "content is required and cannot be empty",
        ));
    }

    if entry_type.trim().is_empty() {
        return Err(ObsidianError::invalid_argument(
            "type is required and cannot be empty",
        ));
    }

    if agent.trim().is_empty() {
        return Err(ObsidianError::invalid_argument(
            "agent is required and cannot be empty",
        ));
    }

    if let Some(bad) = INVALID_AGENT_CHARS.iter().find(|c| agent.contains(**c)) {
        return Err(ObsidianError::invalid_argument(format!(
            "agent name cannot contain {:?} character",
            bad
        )));
    }

    if let Some(confidence) = confidence.filter(|c| !c.is_empty()) {
        confidence.parse::<Confidence>()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn assert_invalid(result: Result<()>, needle: &str) {
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert!(
            error.to_string().contains(needle),
            "{error} should mention {needle:?}"
        );
    }

    #[test]
    fn test_valid_entry() {
        assert!(validate_entry("Chose X over Y", "decision", "main", None).is_ok());
        assert!(validate_entry("Learned a thing", "learning", "architect", Some("low")).is_ok());
        assert!(validate_entry("ok", "feeling", "agent with spaces.v2", Some("high")).is_ok());
    }

    #[test]
    fn test_empty_fields() {
        assert_invalid(validate_entry("", "decision", "main", None), "content");
        assert_invalid(validate_entry(" \t\n", "decision", "main", None), "content");
        assert_invalid(validate_entry("text", "  ", "main", None), "type");
        assert_invalid(validate_entry("text", "decision", "", None), "agent");
        assert_invalid(validate_entry("text", "decision", "   ", None), "agent");
    }

    #[test]
    fn test_agent_path_breaking_chars() {
        for bad in ["team/main", "team\\main", "ma\0in", "main\nx", "main\rx"] {
            assert_invalid(validate_entry("text", "decision", bad, None), "agent name");
        }
    }

    #[test]
    fn test_first_offending_char_in_fixed_order() {
        // Contains both '\n' and '/', '/' is checked first.
        assert_invalid(validate_entry("text", "decision", "a\nb/c", None), "'/'");
        assert_invalid(validate_entry("text", "decision", "a\rb\\c", None), "'\\\\'");
    }

    #[test]
    fn test_confidence_values() {
        for ok in ["high", "medium", "low"] {
            assert!(validate_entry("text", "decision", "main", Some(ok)).is_ok());
        }
        assert_invalid(
            validate_entry("text", "decision", "main", Some("HIGH")),
            "got: HIGH",
        );
        assert_invalid(
            validate_entry("text", "decision", "main", Some("certain")),
            "confidence must be",
        );
    }

    #[test]
    fn test_empty_confidence_is_absent() {
        assert!(validate_entry("text", "decision", "main", Some("")).is_ok());
        assert_invalid(
            validate_entry("text", "decision", "main", Some(" ")),
            "confidence must be",
        );
    }

    #[test]
    fn test_confidence_round_trip() {
        assert_eq!("medium".parse::<Confidence>().unwrap(), Confidence::Medium);
        assert_eq!(Confidence::Low.to_string(), "low");
    }
}
