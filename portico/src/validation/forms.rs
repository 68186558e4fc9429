//! Rule sets of the login and registration forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::ValidationReport;
use super::validator::Validator;
use super::value::FormValues;

/// Default minimum password length on registration.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

/// Message shown on a blank field of a form guarded by [`validate_required`].
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required";

/// Error parsing a [`FormKind`] name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown form kind '{0}', expected 'login' or 'registration'")]
pub struct FormKindError(pub String);

/// The forms with a fixed rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// Email and password.
    Login,
    /// Account creation.
    Registration,
}

impl FormKind {
    /// Build the validator for this form.
    pub fn validator(self, min_password_len: usize) -> Validator {
        match self {
            FormKind::Login => Validator::new()
                .field("email")
                .required("Email is required")
                .email("Invalid email format")
                .field("password")
                .required("Password is required")
                .build(),
            FormKind::Registration => Validator::new()
                .field("firstname")
                .alias("first_name")
                .required("First name is required")
                .field("lastname")
                .alias("last_name")
                .required("Last name is required")
                .field("email")
                .required("Email is required")
                .email("Invalid email format")
                .field("password")
                .alias("password1")
                .required("Password is required")
                .min_length(
                    min_password_len,
                    format!("Password must be at least {min_password_len} characters"),
                )
                .field("confirm_password")
                .alias("password2")
                .required("Please confirm your password")
                .equals_field(["password", "password1"], "Passwords do not match")
                .field("accept-terms")
                .alias("accept_terms")
                .if_present()
                .checked("You must accept the terms of use")
                .build(),
        }
    }

    /// Name used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Registration => "registration",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = FormKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(FormKind::Login),
            "registration" | "register" => Ok(FormKind::Registration),
            other => Err(FormKindError(other.to_string())),
        }
    }
}

/// Validate `values` against the fixed rule set of `kind`.
pub fn validate_form(kind: FormKind, values: &FormValues) -> ValidationReport {
    kind.validator(DEFAULT_MIN_PASSWORD_LEN).validate(values)
}

/// Check the required fields of a form without a dedicated rule set.
///
/// Fields are checked in order and the pass stops at the first blank one,
/// so a failing report holds exactly one error. Fields the form does not
/// contain are skipped.
pub fn validate_required<S: AsRef<str>>(fields: &[S], values: &FormValues) -> ValidationReport {
    let validator = fields.iter().fold(Validator::new(), |validator, field| {
        validator
            .field(field.as_ref())
            .if_present()
            .required(REQUIRED_FIELD_MESSAGE)
            .build()
    });
    let mut results = validator.validate(values).results().to_vec();
    if let Some(first) = results.iter().position(|r| !r.valid) {
        results.truncate(first + 1);
    }
    ValidationReport::new(results)
}
