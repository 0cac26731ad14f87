// File: src/validator.rs
// Purpose: Full-form validation pass over the active schema

use std::collections::HashMap;

use crate::schema::Schema;
use crate::value::FieldValue;

/// Field name to error message, present only for currently failing fields
pub type ErrorMap = HashMap<String, String>;

/// Validate every field the schema knows about
///
/// Reads each field's value (absent treated as empty), runs its checks in
/// declaration order, and records the first failing check's message under
/// the field's key. Fields outside the schema are ignored entirely,
/// whatever their raw value. No check reads another field's value, so
/// evaluation order across fields is unobservable.
pub fn validate(schema: &Schema, values: &HashMap<String, FieldValue>) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let empty = FieldValue::empty();

    for rule in schema.rules() {
        let value = values.get(rule.field()).unwrap_or(&empty);
        if let Some(message) = rule.first_failure(value) {
            errors.insert(rule.field().to_string(), message);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{fields, schema_for, AccountType};

    fn values(entries: &[(&str, &str)]) -> HashMap<String, FieldValue> {
        entries
            .iter()
            .map(|(field, value)| (field.to_string(), FieldValue::from(*value)))
            .collect()
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let schema = schema_for(AccountType::Advanced);
        let errors = validate(schema, &HashMap::new());

        assert_eq!(errors.get(fields::USERNAME), Some(&"Required".to_string()));
        assert_eq!(errors.get(fields::PASSWORD), Some(&"Required".to_string()));
        // Optional fields stay silent while empty
        assert!(!errors.contains_key(fields::SERVER_ADDRESS));
        assert!(!errors.contains_key(fields::SERVER_PATH));
        assert!(!errors.contains_key(fields::PORT));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let schema = schema_for(AccountType::Advanced);
        let errors = validate(
            schema,
            &values(&[
                (fields::USERNAME, "bob@example.com"),
                (fields::PASSWORD, "ab.cdef"),
            ]),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_first_failure_wins_per_field() {
        let schema = schema_for(AccountType::Advanced);
        let errors = validate(
            schema,
            &values(&[
                (fields::USERNAME, "bob@example.com"),
                (fields::PASSWORD, "abcdef"),
            ]),
        );
        assert_eq!(
            errors.get(fields::PASSWORD),
            Some(&"Password must include at least one dot (.)".to_string())
        );
    }

    #[test]
    fn test_fields_outside_schema_never_reported() {
        let schema = schema_for(AccountType::Basic);
        // Garbage in fields the basic schema ignores
        let errors = validate(
            schema,
            &values(&[
                (fields::USERNAME, "bob@example.com"),
                (fields::PASSWORD, "ab.cdef"),
                (fields::PORT, "not-a-port"),
                (fields::SERVER_PATH, "/whatever"),
                ("unknownField", "junk"),
            ]),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let schema = schema_for(AccountType::Advanced);
        let form = values(&[(fields::USERNAME, "broken"), (fields::PORT, "80")]);

        let first = validate(schema, &form);
        let second = validate(schema, &form);
        assert_eq!(first, second);
    }
}
