// File: src/rules.rs
// Purpose: Declarative per-field validation rules

use accountform_validation::{
    check_int_in_range, contains, has_min_length, is_valid_email, is_valid_url, IntRangeViolation,
};

use crate::value::FieldValue;

/// Primitive kind a field rule declares for its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Flag,
}

/// A single validation check: predicate plus the message shown on failure
///
/// Every check except `Required` passes on empty input, so optional fields
/// are only validated once the user has typed something.
#[derive(Debug, Clone)]
pub enum Check {
    /// Value must be non-empty
    Required { message: String },
    /// Value must look like an email address
    Email { message: String },
    /// Value must be at least `min` characters long
    MinLength { min: usize, message: String },
    /// Value must contain `needle`
    Contains { needle: String, message: String },
    /// Value must be a syntactically valid absolute URL
    Url { message: String },
    /// Value must parse as a positive integer within [min, max];
    /// the failing sub-check picks the message
    IntRange { label: String, min: i64, max: i64 },
}

impl Check {
    pub fn required(message: &str) -> Self {
        Check::Required {
            message: message.to_string(),
        }
    }

    pub fn email(message: &str) -> Self {
        Check::Email {
            message: message.to_string(),
        }
    }

    pub fn min_length(min: usize, message: &str) -> Self {
        Check::MinLength {
            min,
            message: message.to_string(),
        }
    }

    pub fn contains(needle: &str, message: &str) -> Self {
        Check::Contains {
            needle: needle.to_string(),
            message: message.to_string(),
        }
    }

    pub fn url(message: &str) -> Self {
        Check::Url {
            message: message.to_string(),
        }
    }

    pub fn int_range(label: &str, min: i64, max: i64) -> Self {
        Check::IntRange {
            label: label.to_string(),
            min,
            max,
        }
    }

    /// Run the check against a raw value
    pub fn run(&self, value: &FieldValue) -> Result<(), String> {
        // Only `Required` looks at empty input
        if value.is_empty() {
            return match self {
                Check::Required { message } => Err(message.clone()),
                _ => Ok(()),
            };
        }

        let text = value.as_text();
        match self {
            Check::Required { .. } => Ok(()),
            Check::Email { message } => {
                if is_valid_email(text) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            Check::MinLength { min, message } => {
                if has_min_length(text, *min) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            Check::Contains { needle, message } => {
                if contains(text, needle) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            Check::Url { message } => {
                if is_valid_url(text) {
                    Ok(())
                } else {
                    Err(message.clone())
                }
            }
            Check::IntRange { label, min, max } => check_int_in_range(text, *min, *max)
                .map_err(|violation| range_message(label, violation)),
        }
    }
}

fn range_message(label: &str, violation: IntRangeViolation) -> String {
    match violation {
        IntRangeViolation::NotAnInteger => format!("{} must be an integer", label),
        IntRangeViolation::NotPositive => format!("{} must be a positive number", label),
        IntRangeViolation::BelowMin(min) => {
            format!("{} must be greater than or equal to {}", label, min)
        }
        IntRangeViolation::AboveMax(max) => {
            format!("{} must be less than or equal to {}", label, max)
        }
    }
}

/// Validation rules for one named field
///
/// Checks run in declaration order; the first failing check supplies the
/// field's error message and later checks are skipped.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: String,
    kind: FieldKind,
    required: bool,
    checks: Vec<Check>,
}

impl FieldRule {
    /// Rule with no checks: the field exists in the schema but any value passes
    pub fn new(field: &str, kind: FieldKind) -> Self {
        Self {
            field: field.to_string(),
            kind,
            required: false,
            checks: Vec::new(),
        }
    }

    /// Append a check, preserving declaration order
    pub fn check(mut self, check: Check) -> Self {
        if matches!(check, Check::Required { .. }) {
            self.required = true;
        }
        self.checks.push(check);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// First failing check's message, or `None` when the value passes
    pub fn first_failure(&self, value: &FieldValue) -> Option<String> {
        for check in &self.checks {
            if let Err(message) = check.run(value) {
                return Some(message);
            }
        }
        None
    }
}
