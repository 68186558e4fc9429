//! Trigger-to-command wiring.
//!
//! Page triggers (button clicks, overlay clicks, the Escape key) are mapped
//! to controller commands once at initialisation; form submissions are
//! mapped to the rule set or the required fields that guard them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dialog::{DialogId, LOGIN_DIALOG, REGISTER_DIALOG};
use crate::validation::FormKind;

/// Form id of the login form.
pub const LOGIN_FORM: &str = "login-form";
/// Form id of the registration form.
pub const REGISTER_FORM: &str = "register-form";

/// A user action on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Click on the element with this id.
    Click(String),
    /// Click on a dialog's backdrop, outside its content.
    Overlay,
    /// Key press, by key name (`"Escape"`).
    Key(String),
}

impl Trigger {
    /// Click on the element with this id.
    pub fn click(id: impl Into<String>) -> Self {
        Self::Click(id.into())
    }

    /// Press of the named key.
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }
}

/// An operation run in response to a trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a dialog, closing any other.
    Open(DialogId),
    /// Close one dialog.
    Close(DialogId),
    /// Close `from` and open `to` as one transition.
    Switch { from: DialogId, to: DialogId },
    /// Close every dialog.
    CloseAll,
    /// Flip a password field between masked and plain text.
    TogglePassword { form: String, field: String },
}

impl Command {
    /// Password visibility toggle for `field` of `form`.
    pub fn toggle_password(form: impl Into<String>, field: impl Into<String>) -> Self {
        Self::TogglePassword {
            form: form.into(),
            field: field.into(),
        }
    }
}

/// Mapping from triggers to commands and from form ids to their guards.
#[derive(Debug, Clone, Default)]
pub struct CommandMap {
    commands: HashMap<Trigger, Command>,
    forms: HashMap<String, FormKind>,
    required: HashMap<String, Vec<String>>,
}

impl CommandMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The wiring of the standard auth page.
    pub fn standard() -> Self {
        let login = DialogId::from(LOGIN_DIALOG);
        let register = DialogId::from(REGISTER_DIALOG);
        let to_register = Command::Switch {
            from: login.clone(),
            to: register.clone(),
        };
        let to_login = Command::Switch {
            from: register.clone(),
            to: login.clone(),
        };

        Self::new()
            .bind(Trigger::click("btn-login-modal"), Command::Open(login))
            .bind(Trigger::click("btn-register-modal"), Command::Open(register))
            .bind(Trigger::click("switch-to-register"), to_register.clone())
            .bind(Trigger::click("show-register"), to_register)
            .bind(Trigger::click("switch-to-login"), to_login.clone())
            .bind(Trigger::click("show-login"), to_login)
            .bind(Trigger::click("close-modal"), Command::CloseAll)
            .bind(Trigger::click("close"), Command::CloseAll)
            .bind(Trigger::Overlay, Command::CloseAll)
            .bind(Trigger::key("Escape"), Command::CloseAll)
            .bind(
                Trigger::click("toggle-login-password"),
                Command::toggle_password(LOGIN_FORM, "password"),
            )
            .bind(
                Trigger::click("toggle-register-password"),
                Command::toggle_password(REGISTER_FORM, "password"),
            )
            .bind(
                Trigger::click("toggle-register-confirm-password"),
                Command::toggle_password(REGISTER_FORM, "confirm_password"),
            )
            .bind_form(LOGIN_FORM, FormKind::Login)
            .bind_form(REGISTER_FORM, FormKind::Registration)
    }

    /// Bind a trigger, replacing any previous binding.
    pub fn bind(mut self, trigger: Trigger, command: Command) -> Self {
        self.commands.insert(trigger, command);
        self
    }

    /// Guard a form with a rule set.
    pub fn bind_form(mut self, form: impl Into<String>, kind: FormKind) -> Self {
        self.forms.insert(form.into(), kind);
        self
    }

    /// Guard a form with a plain required-field check.
    ///
    /// Only used for forms without a rule set bound through
    /// [`bind_form`](Self::bind_form).
    pub fn bind_required<I, S>(mut self, form: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields.into_iter().map(Into::into).collect();
        self.required.insert(form.into(), fields);
        self
    }

    /// Command bound to a trigger.
    pub fn command(&self, trigger: &Trigger) -> Option<&Command> {
        self.commands.get(trigger)
    }

    /// Rule set guarding a form.
    pub fn form_kind(&self, form: &str) -> Option<FormKind> {
        self.forms.get(form).copied()
    }

    /// Required fields guarding a form, in check order.
    pub fn required_fields(&self, form: &str) -> Option<&[String]> {
        self.required.get(form).map(Vec::as_slice)
    }
}
