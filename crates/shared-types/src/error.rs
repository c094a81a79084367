use serde::{Deserialize, Serialize};
use std::fmt;

/// A single reason a field value fails its rules.
///
/// Invalid input is an ordinary field state rather than a fault, so these are
/// reported alongside the value and never propagated as errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    Required,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Required => write!(f, "value is required"),
            ValidationIssue::TooShort { min, actual } => {
                write!(f, "value has {actual} characters, at least {min} required")
            }
            ValidationIssue::TooLong { max, actual } => {
                write!(f, "value has {actual} characters, at most {max} allowed")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(ValidationIssue::Required.to_string(), "value is required");
        assert_eq!(
            ValidationIssue::TooShort { min: 3, actual: 2 }.to_string(),
            "value has 2 characters, at least 3 required"
        );
        assert_eq!(
            ValidationIssue::TooLong { max: 5, actual: 9 }.to_string(),
            "value has 9 characters, at most 5 allowed"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(ValidationIssue::TooShort { min: 3, actual: 1 }).unwrap();
        assert_eq!(json["kind"], "too_short");
        assert_eq!(json["min"], 3);
        assert_eq!(json["actual"], 1);
    }
}
