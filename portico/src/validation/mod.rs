//! Form validation.
//!
//! Fields are checked with a fluent builder; each form kind has a fixed rule
//! set. All fields are evaluated on every pass so a single report lists
//! every violation. Other forms may be guarded by a plain required-field
//! check, which stops at the first blank field.
//!
//! # Example
//!
//! ```
//! use portico::validation::{FormValues, Validator};
//!
//! let values = FormValues::new()
//!     .text("email", "someone@example.com")
//!     .text("password", "");
//!
//! let report = Validator::new()
//!     .field("email")
//!         .required("Email is required")
//!         .email("Invalid email format")
//!     .field("password")
//!         .required("Password is required")
//!     .validate(&values);
//!
//! assert!(report.is_invalid());
//! assert_eq!(report.first_invalid(), Some("password"));
//! ```

mod forms;
mod result;
mod rules;
mod validator;
mod value;

pub use forms::{
    DEFAULT_MIN_PASSWORD_LEN, FormKind, FormKindError, REQUIRED_FIELD_MESSAGE, validate_form,
    validate_required,
};
pub use result::{ValidationReport, ValidationResult};
pub use rules::{Presence, Rule, is_email_shape};
pub use validator::{FieldBuilder, Validator};
pub use value::{FieldValue, FormValues};
