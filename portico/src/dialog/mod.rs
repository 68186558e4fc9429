//! Modal dialog coordination.
//!
//! The [`DialogRegistry`] tracks which dialogs exist and which one is shown;
//! the [`DialogController`] layers the page scroll lock on top of it.

mod controller;
mod registry;

use std::fmt;

pub use controller::DialogController;
pub use registry::{DialogDescriptor, DialogRegistry};

/// Id of the login dialog.
pub const LOGIN_DIALOG: &str = "login-modal";
/// Id of the registration dialog.
pub const REGISTER_DIALOG: &str = "register-modal";
/// Id of the legacy combined auth dialog.
pub const AUTH_DIALOG: &str = "auth-modal";

/// Dialogs discovered on a standard page.
pub const STANDARD_DIALOGS: [&str; 3] = [LOGIN_DIALOG, REGISTER_DIALOG, AUTH_DIALOG];

/// Opaque identifier naming a dialog element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialogId(String);

impl DialogId {
    /// Create a new dialog id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DialogId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DialogId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
