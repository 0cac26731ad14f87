// File: src/schema.rs
// Purpose: Account types and the discriminator-keyed schema registry

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::rules::{Check, FieldKind, FieldRule};

/// Field names shared with the UI collaborator
pub mod fields {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const SERVER_ADDRESS: &str = "serverAddress";
    pub const SERVER_PATH: &str = "serverPath";
    pub const PORT: &str = "port";
    pub const USE_SSL: &str = "useSSL";
    pub const ACCOUNT_TYPE: &str = "accountType";
}

/// Account type selected by the user; decides which schema is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Basic,
    Advanced,
}

impl AccountType {
    /// String form used in form values and the payload
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Basic => "basic",
            AccountType::Advanced => "advanced",
        }
    }

    /// Parse a user-selected value
    ///
    /// An unrecognized string means the UI options and the engine disagree,
    /// not that the user did something wrong, so it degrades to `Basic`
    /// instead of failing.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "advanced" => AccountType::Advanced,
            _ => AccountType::Basic,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ordered set of field rules active under one account type
#[derive(Debug, Clone)]
pub struct Schema {
    account_type: AccountType,
    rules: Vec<FieldRule>,
}

impl Schema {
    fn new(account_type: AccountType, rules: Vec<FieldRule>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<&str> = rules.iter().map(|r| r.field()).collect();
                names.sort_unstable();
                names.windows(2).all(|pair| pair[0] != pair[1])
            },
            "each field may appear only once per schema"
        );
        Self {
            account_type,
            rules,
        }
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Rules for one field; `None` means the schema ignores the field
    pub fn rule_for(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field() == field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.rule_for(field).is_some()
    }
}

// The credential fields every account type shares
fn credential_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(fields::USERNAME, FieldKind::Text)
            .check(Check::email("Invalid email format"))
            .check(Check::required("Required")),
        FieldRule::new(fields::PASSWORD, FieldKind::Text)
            .check(Check::required("Required"))
            .check(Check::min_length(
                6,
                "Password must be at least 6 characters long",
            ))
            .check(Check::contains(
                ".",
                "Password must include at least one dot (.)",
            )),
        FieldRule::new(fields::SERVER_ADDRESS, FieldKind::Text).check(Check::url("Invalid URL")),
    ]
}

static BASIC: Lazy<Schema> =
    Lazy::new(|| Schema::new(AccountType::Basic, credential_rules()));

static ADVANCED: Lazy<Schema> = Lazy::new(|| {
    let mut rules = credential_rules();
    rules.push(FieldRule::new(fields::SERVER_PATH, FieldKind::Text));
    rules.push(
        FieldRule::new(fields::PORT, FieldKind::Number)
            .check(Check::int_range("Port", 1024, 65535)),
    );
    Schema::new(AccountType::Advanced, rules)
});

/// Schema active under an account type; total over the closed enum
pub fn schema_for(account_type: AccountType) -> &'static Schema {
    match account_type {
        AccountType::Basic => &BASIC,
        AccountType::Advanced => &ADVANCED,
    }
}

/// Catalog lookup: the rule for one field under one account type
///
/// `None` means "no constraint" for that field; whether the field exists
/// under the schema at all is answered by `Schema::has_field`.
pub fn rule_for(account_type: AccountType, field: &str) -> Option<&'static FieldRule> {
    schema_for(account_type).rule_for(field)
}
