// File: src/controller.rs
// Purpose: Form state controller owning values and errors

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::schema::{fields, schema_for, AccountType, Schema};
use crate::submit::{assemble_payload, can_submit, SubmitResult};
use crate::validator::{validate, ErrorMap};
use crate::value::FieldValue;

/// Owns one form session: the account type, raw values, and current errors
///
/// The controller is the only writer of values and errors. Every transition
/// re-runs validation over the full value set under the active schema, so
/// the error map can never go stale relative to it.
#[derive(Debug, Clone)]
pub struct FormController {
    account_type: AccountType,
    values: HashMap<String, FieldValue>,
    errors: ErrorMap,
}

impl FormController {
    /// Fresh form session: advanced account type, empty fields, SSL on
    ///
    /// The initial error map already flags the required credentials.
    pub fn new() -> Self {
        let mut values = HashMap::new();
        for field in [
            fields::USERNAME,
            fields::PASSWORD,
            fields::SERVER_ADDRESS,
            fields::SERVER_PATH,
            fields::PORT,
        ] {
            values.insert(field.to_string(), FieldValue::empty());
        }
        values.insert(fields::USE_SSL.to_string(), FieldValue::Flag(true));
        values.insert(
            fields::ACCOUNT_TYPE.to_string(),
            FieldValue::from(AccountType::Advanced.as_str()),
        );

        let mut controller = Self {
            account_type: AccountType::Advanced,
            values,
            errors: ErrorMap::new(),
        };
        controller.revalidate();
        controller
    }

    /// Switch the active account type and revalidate everything
    ///
    /// Values of fields the new schema ignores are kept, not cleared, so
    /// switching back restores them.
    pub fn set_account_type(&mut self, raw: &str) {
        self.account_type = AccountType::parse(raw);
        self.values
            .insert(fields::ACCOUNT_TYPE.to_string(), FieldValue::from(raw));
        debug!(account_type = %self.account_type, "account type changed");
        self.revalidate();
    }

    /// Replace one field's raw value and revalidate everything
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        if field == fields::ACCOUNT_TYPE {
            // Keep the parsed discriminator and the stored value in step
            let raw = value.as_text().to_string();
            self.set_account_type(&raw);
            return;
        }

        self.values.insert(field.to_string(), value);
        debug!(field, "field changed");
        self.revalidate();
    }

    /// Validate once more, then assemble the payload or report the errors
    pub fn submit(&mut self) -> SubmitResult {
        self.revalidate();

        if !can_submit(&self.errors) {
            warn!(error_count = self.errors.len(), "submission blocked");
            return SubmitResult::Blocked(self.errors.clone());
        }

        let payload = assemble_payload(self.account_type, &self.values);
        info!(account_type = %self.account_type, "submission accepted");
        SubmitResult::Accepted(payload)
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Schema currently applied to the form values
    pub fn active_schema(&self) -> &'static Schema {
        schema_for(self.account_type)
    }

    /// Current per-field errors, recomputed after every transition
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// Whether the form may be submitted in its current state
    pub fn can_submit(&self) -> bool {
        can_submit(&self.errors)
    }

    /// Raw stored value for a field, if any was ever set
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    fn revalidate(&mut self) {
        self.errors = validate(self.active_schema(), &self.values);
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
