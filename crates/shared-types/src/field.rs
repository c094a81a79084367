use serde::{Deserialize, Serialize};

use crate::ValidationIssue;

/// Length constraints applied to every edit of a field.
///
/// Lengths are counted in Unicode scalar values. Conflicting bounds
/// (`min_length > max_length`) are accepted as-is and simply make every
/// value invalid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FieldRules {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl FieldRules {
    /// Every rule the value breaks, in the order required, too short, too long.
    pub fn issues(&self, value: &str) -> Vec<ValidationIssue> {
        let actual = value.chars().count();
        let mut issues = Vec::new();

        if self.required && value.is_empty() {
            issues.push(ValidationIssue::Required);
        }
        if let Some(min) = self.min_length {
            if actual < min {
                issues.push(ValidationIssue::TooShort { min, actual });
            }
        }
        if let Some(max) = self.max_length {
            if actual > max {
                issues.push(ValidationIssue::TooLong { max, actual });
            }
        }
        issues
    }

    /// Whether the value satisfies all rules. Agrees with `issues(value).is_empty()`.
    pub fn check(&self, value: &str) -> bool {
        let actual = value.chars().count();
        let missing = self.required && value.is_empty();
        let too_short = self.min_length.is_some_and(|min| actual < min);
        let too_long = self.max_length.is_some_and(|max| actual > max);
        !(missing || too_short || too_long)
    }
}

/// Payload delivered to the change callback after every edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldChange {
    pub value: String,
    pub is_valid: bool,
}

/// Dominant visual state of the field border.
///
/// Precedence is `Disabled > Invalid > Valid > Focused > Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVisual {
    #[default]
    Default,
    Focused,
    Valid,
    Invalid,
    Disabled,
}

impl FieldVisual {
    /// Value used for the `data-state` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldVisual::Default => "default",
            FieldVisual::Focused => "focused",
            FieldVisual::Valid => "valid",
            FieldVisual::Invalid => "invalid",
            FieldVisual::Disabled => "disabled",
        }
    }
}

/// Transient state owned by one rendered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_focused: bool,
    pub is_valid: bool,
    pub touched: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            is_focused: false,
            is_valid: true,
            touched: false,
        }
    }
}

impl FieldState {
    /// Apply an edit: store the raw value, mark touched, revalidate.
    pub fn apply_edit(&mut self, rules: &FieldRules, raw: impl Into<String>) -> FieldChange {
        let value = raw.into();
        let is_valid = rules.check(&value);

        self.value = value.clone();
        self.touched = true;
        self.is_valid = is_valid;

        FieldChange { value, is_valid }
    }

    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    pub fn blur(&mut self) {
        self.is_focused = false;
    }

    /// Label shrinks while the field is focused or holds content.
    pub fn label_floated(&self) -> bool {
        self.is_focused || !self.value.is_empty()
    }

    /// Placeholder to hand to the text control; empty while focused.
    pub fn placeholder_text<'a>(&self, placeholder: &'a str) -> &'a str {
        if self.is_focused {
            ""
        } else {
            placeholder
        }
    }

    pub fn show_error(&self) -> bool {
        self.touched && !self.is_valid
    }

    pub fn show_success(&self, has_message: bool) -> bool {
        self.touched && self.is_valid && has_message
    }

    /// Dominant visual state for the given `disabled` flag.
    pub fn visual(&self, disabled: bool) -> FieldVisual {
        if disabled {
            FieldVisual::Disabled
        } else if self.show_error() {
            FieldVisual::Invalid
        } else if self.touched && self.is_valid {
            FieldVisual::Valid
        } else if self.is_focused {
            FieldVisual::Focused
        } else {
            FieldVisual::Default
        }
    }

    /// Every visual modifier that applies, in a fixed layering order.
    ///
    /// Later classes win in the stylesheet, so `is-disabled` always comes last.
    pub fn visual_classes(&self, disabled: bool) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.is_focused {
            classes.push("is-focused");
        }
        if self.touched {
            classes.push(if self.is_valid { "is-valid" } else { "is-invalid" });
        }
        if disabled {
            classes.push("is-disabled");
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn username_rules() -> FieldRules {
        FieldRules {
            required: true,
            min_length: Some(3),
            max_length: Some(20),
        }
    }

    #[test]
    fn initial_state() {
        let state = FieldState::default();
        assert_eq!(state.value, "");
        assert!(!state.is_focused);
        assert!(state.is_valid);
        assert!(!state.touched);
        assert!(!state.show_error());
        assert!(!state.show_success(true));
    }

    #[test]
    fn required_rejects_empty() {
        let mut state = FieldState::default();
        let change = state.apply_edit(
            &FieldRules {
                required: true,
                ..Default::default()
            },
            "",
        );
        assert!(!change.is_valid);
        assert!(state.touched);
        assert!(state.show_error());
    }

    #[test]
    fn empty_is_valid_without_required() {
        let mut state = FieldState::default();
        assert!(state.apply_edit(&FieldRules::default(), "").is_valid);
    }

    #[test]
    fn min_length_boundary() {
        let rules = FieldRules {
            min_length: Some(3),
            ..Default::default()
        };
        assert!(!rules.check("ab"));
        assert!(rules.check("abc"));
    }

    #[test]
    fn max_length_boundary() {
        let rules = FieldRules {
            max_length: Some(5),
            ..Default::default()
        };
        assert!(rules.check("abcde"));
        assert!(!rules.check("abcdef"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rules = FieldRules {
            min_length: Some(3),
            max_length: Some(3),
            ..Default::default()
        };
        assert!(rules.check("نام"));
    }

    #[test]
    fn raw_value_is_not_trimmed() {
        let mut state = FieldState::default();
        let change = state.apply_edit(&username_rules(), "  ab  ");
        assert_eq!(change.value, "  ab  ");
        assert_eq!(state.value, "  ab  ");
        assert!(change.is_valid);
    }

    #[test]
    fn too_short_scenario() {
        let mut state = FieldState::default();
        let change = state.apply_edit(&username_rules(), "ab");
        assert_eq!(
            change,
            FieldChange {
                value: "ab".into(),
                is_valid: false
            }
        );
        assert!(state.show_error());
        assert!(!state.show_success(true));
    }

    #[test]
    fn valid_scenario() {
        let mut state = FieldState::default();
        let change = state.apply_edit(&username_rules(), "abc");
        assert_eq!(
            change,
            FieldChange {
                value: "abc".into(),
                is_valid: true
            }
        );
        assert!(!state.show_error());
        assert!(state.show_success(true));
        assert!(!state.show_success(false));
    }

    #[test]
    fn repeated_edit_is_idempotent() {
        let mut state = FieldState::default();
        let first = state.apply_edit(&username_rules(), "ab");
        let second = state.apply_edit(&username_rules(), "ab");
        assert_eq!(first, second);
    }

    #[test]
    fn issues_reports_every_failing_check() {
        let rules = FieldRules {
            required: true,
            min_length: Some(3),
            max_length: Some(0),
        };
        assert_eq!(
            rules.issues(""),
            vec![
                ValidationIssue::Required,
                ValidationIssue::TooShort { min: 3, actual: 0 },
            ]
        );
        assert_eq!(
            rules.issues("abcd"),
            vec![ValidationIssue::TooLong { max: 0, actual: 4 }]
        );
    }

    #[test]
    fn check_agrees_with_issues() {
        let rule_sets = [
            FieldRules::default(),
            username_rules(),
            FieldRules {
                required: true,
                ..Default::default()
            },
            FieldRules {
                min_length: Some(5),
                max_length: Some(2),
                ..Default::default()
            },
            FieldRules {
                max_length: Some(0),
                ..Default::default()
            },
        ];
        for rules in rule_sets {
            for value in ["", "a", "ab", "abc", "abcdef", "نام کاربری"] {
                assert_eq!(
                    rules.check(value),
                    rules.issues(value).is_empty(),
                    "rules {rules:?} value {value:?}"
                );
            }
        }
    }

    #[test]
    fn zero_max_length_is_a_real_bound() {
        let rules = FieldRules {
            max_length: Some(0),
            ..Default::default()
        };
        assert!(rules.check(""));
        assert!(!rules.check("a"));
    }

    #[test]
    fn focus_and_blur_do_not_validate() {
        let mut state = FieldState::default();
        state.focus();
        assert!(state.is_focused);
        assert!(!state.touched);
        assert!(state.is_valid);
        state.blur();
        assert!(!state.is_focused);
        assert!(!state.touched);
    }

    #[test]
    fn label_floats_on_focus_or_content() {
        let mut state = FieldState::default();
        assert!(!state.label_floated());
        state.focus();
        assert!(state.label_floated());
        state.blur();
        state.apply_edit(&FieldRules::default(), "x");
        assert!(state.label_floated());
    }

    #[test]
    fn placeholder_hidden_while_focused() {
        let mut state = FieldState::default();
        assert_eq!(state.placeholder_text("Search"), "Search");
        state.focus();
        assert_eq!(state.placeholder_text("Search"), "");
    }

    #[test]
    fn visual_precedence() {
        let mut state = FieldState::default();
        assert_eq!(state.visual(false), FieldVisual::Default);

        state.focus();
        assert_eq!(state.visual(false), FieldVisual::Focused);

        state.apply_edit(&username_rules(), "ab");
        assert_eq!(state.visual(false), FieldVisual::Invalid);

        state.apply_edit(&username_rules(), "abc");
        assert_eq!(state.visual(false), FieldVisual::Valid);

        assert_eq!(state.visual(true), FieldVisual::Disabled);
    }

    #[test]
    fn visual_classes_layer_in_fixed_order() {
        let mut state = FieldState::default();
        assert!(state.visual_classes(false).is_empty());

        state.focus();
        state.apply_edit(&username_rules(), "ab");
        assert_eq!(
            state.visual_classes(true),
            vec!["is-focused", "is-invalid", "is-disabled"]
        );
    }
}
