// File: src/submit.rs
// Purpose: Submission gate and payload assembly

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::schema::{fields, AccountType};
use crate::validator::ErrorMap;
use crate::value::FieldValue;

/// Whether the current error state allows submission
pub fn can_submit(errors: &ErrorMap) -> bool {
    errors.is_empty()
}

/// Validated payload handed to the caller on successful submission
///
/// `server_path` and `port` are present only for advanced accounts; on the
/// wire they are omitted keys, not nulls. `port` stays the string the user
/// typed. The SSL flag never travels in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub username: String,
    pub password: String,
    pub server_address: String,
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

/// Assemble the payload for the active account type
///
/// Inclusion of the extended fields is driven by the discriminator alone,
/// not by per-field validity; this is the one piece of cross-field logic
/// in the engine.
pub fn assemble_payload(
    account_type: AccountType,
    values: &HashMap<String, FieldValue>,
) -> Payload {
    let text = |field: &str| {
        values
            .get(field)
            .map(|value| value.as_text().to_string())
            .unwrap_or_default()
    };

    let mut payload = Payload {
        username: text(fields::USERNAME),
        password: text(fields::PASSWORD),
        server_address: text(fields::SERVER_ADDRESS),
        account_type,
        server_path: None,
        port: None,
    };

    if account_type == AccountType::Advanced {
        payload.server_path = Some(text(fields::SERVER_PATH));
        payload.port = Some(text(fields::PORT));
    }

    payload
}

/// Result of a submit request
#[derive(Debug, Clone)]
pub enum SubmitResult {
    /// Validation passed; the payload is ready for dispatch
    Accepted(Payload),
    /// Validation failed; carries the current error map
    Blocked(ErrorMap),
}

impl SubmitResult {
    /// Check if the submission was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitResult::Accepted(_))
    }

    /// Check if the submission was blocked
    pub fn is_blocked(&self) -> bool {
        !self.is_accepted()
    }

    /// Extract the payload if the submission was accepted
    pub fn ok(self) -> Option<Payload> {
        match self {
            SubmitResult::Accepted(payload) => Some(payload),
            SubmitResult::Blocked(_) => None,
        }
    }

    /// Extract the error map if the submission was blocked
    pub fn err(self) -> Option<ErrorMap> {
        match self {
            SubmitResult::Accepted(_) => None,
            SubmitResult::Blocked(errors) => Some(errors),
        }
    }

    /// Convert into a `Result` for `?`-style callers
    pub fn into_result(self) -> Result<Payload, SubmitBlocked> {
        match self {
            SubmitResult::Accepted(payload) => Ok(payload),
            SubmitResult::Blocked(errors) => Err(SubmitBlocked { errors }),
        }
    }
}

/// Error form of a blocked submission
///
/// The caller must re-present these field errors to the user, not a
/// generic failure.
#[derive(Debug, Clone, Error)]
#[error("submission blocked by {} invalid field(s)", .errors.len())]
pub struct SubmitBlocked {
    /// Field name to message, identical to the controller's current errors
    pub errors: ErrorMap,
}
