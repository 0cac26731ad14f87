//! Accountform Validation Core
//!
//! Pure validation functions with no knowledge of forms or schemas.
//! The form engine maps these predicates to per-field error messages.

pub mod email;
pub mod numeric;
pub mod string;
pub mod url;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use string::*;
pub use url::*;
