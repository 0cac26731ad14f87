// Accountform - schema-driven credential form validation engine
// The account type selects the active rule set; every change revalidates
// the whole form and an empty error map gates submission.

pub mod controller;
pub mod rules;
pub mod schema;
pub mod submit;
pub mod validator;
pub mod value;

// Re-export the engine surface
pub use controller::FormController;
pub use rules::{Check, FieldKind, FieldRule};
pub use schema::{fields, rule_for, schema_for, AccountType, Schema};
pub use submit::{assemble_payload, can_submit, Payload, SubmitBlocked, SubmitResult};
pub use validator::{validate, ErrorMap};
pub use value::FieldValue;
