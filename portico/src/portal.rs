//! The portal: public surface tying dialogs, validation and errors together.

use std::collections::HashSet;

use log::{debug, info};

use crate::config::PortalConfig;
use crate::dialog::{
    DialogController, DialogDescriptor, DialogId, DialogRegistry, STANDARD_DIALOGS,
};
use crate::dispatch::{Command, CommandMap, Trigger};
use crate::host::{FieldSurface, PageHost};
use crate::presenter::ErrorPresenter;
use crate::validation::{FormKind, FormValues, ValidationReport, validate_required};

/// What should happen to a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values passed validation; the submission goes on to the server.
    Proceed,
    /// Validation failed; the submission is cancelled and errors are shown.
    Cancelled(ValidationReport),
}

impl SubmitOutcome {
    /// Whether the submission goes ahead.
    pub fn proceeds(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Auth dialogs and forms of one page.
///
/// Constructed once when the page loads; owns the host page, the dialog
/// controller, the error presenter and the trigger wiring.
#[derive(Debug)]
pub struct Portal<H> {
    host: H,
    dialogs: DialogController,
    errors: ErrorPresenter,
    commands: CommandMap,
    config: PortalConfig,
    revealed: HashSet<(String, String)>,
}

impl<H: PageHost + FieldSurface> Portal<H> {
    /// Set up the standard auth page: login, registration and legacy dialogs
    /// with their standard triggers.
    pub fn new(host: H, config: PortalConfig) -> Self {
        Self::with_wiring(host, config, STANDARD_DIALOGS, CommandMap::standard())
    }

    /// Set up a page with custom dialogs and wiring.
    ///
    /// Dialogs the host does not contain are skipped.
    pub fn with_wiring<I, S>(
        host: H,
        config: PortalConfig,
        dialogs: I,
        commands: CommandMap,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<DialogId>,
    {
        let mut registry = DialogRegistry::new();
        for id in dialogs {
            registry.register(id, &host);
        }
        debug!(
            "Portal initialised with {} dialog(s)",
            registry.descriptors().len()
        );
        Self {
            host,
            dialogs: DialogController::new(registry),
            errors: ErrorPresenter::new(),
            commands,
            config,
            revealed: HashSet::new(),
        }
    }

    /// Open a dialog, closing any other.
    pub fn open_dialog(&mut self, id: &str) {
        self.dialogs.open(&DialogId::from(id), &mut self.host);
    }

    /// Close a dialog.
    pub fn close_dialog(&mut self, id: &str) {
        self.dialogs.close(&DialogId::from(id), &mut self.host);
    }

    /// Close every dialog.
    pub fn close_all_dialogs(&mut self) {
        self.dialogs.close_all(&mut self.host);
    }

    /// Replace one dialog with another without releasing the scroll lock.
    pub fn switch_dialog(&mut self, from: &str, to: &str) {
        self.dialogs
            .switch_to(&DialogId::from(from), &DialogId::from(to), &mut self.host);
    }

    /// Validate values against a form's rule set without touching the page.
    pub fn validate_form(&self, kind: FormKind, values: &FormValues) -> ValidationReport {
        kind.validator(self.config.min_password_len).validate(values)
    }

    /// Handle a form submission.
    ///
    /// Errors from the previous attempt are cleared first. Forms with a rule
    /// set are validated against it; forms with only required fields get the
    /// plain required-field check; other forms are not validated. On failure
    /// the first invalid field receives focus.
    pub fn submit(&mut self, form: &str, values: &FormValues) -> SubmitOutcome {
        let report = if let Some(kind) = self.commands.form_kind(form) {
            self.validate_form(kind, values)
        } else if let Some(fields) = self.commands.required_fields(form) {
            validate_required(fields, values)
        } else {
            debug!("Form '{}' is not guarded, submitting", form);
            return SubmitOutcome::Proceed;
        };
        self.errors.present(&mut self.host, form, &report);
        if let Some(field) = report.first_invalid() {
            self.host.focus(form, field);
            info!(
                "Form '{}' cancelled: {} invalid field(s)",
                form,
                report.error_count()
            );
            SubmitOutcome::Cancelled(report)
        } else {
            info!("Form '{}' submitted", form);
            SubmitOutcome::Proceed
        }
    }

    /// Run the command bound to `trigger`. Returns false if nothing is bound.
    pub fn trigger(&mut self, trigger: &Trigger) -> bool {
        let Some(command) = self.commands.command(trigger).cloned() else {
            debug!("No command bound to {:?}", trigger);
            return false;
        };
        self.execute(&command);
        true
    }

    /// Run a controller command.
    pub fn execute(&mut self, command: &Command) {
        match command {
            Command::Open(id) => self.dialogs.open(id, &mut self.host),
            Command::Close(id) => self.dialogs.close(id, &mut self.host),
            Command::Switch { from, to } => self.dialogs.switch_to(from, to, &mut self.host),
            Command::CloseAll => self.dialogs.close_all(&mut self.host),
            Command::TogglePassword { form, field } => {
                self.toggle_password(form, field);
            }
        }
    }

    /// Flip a password field between masked and plain text. Returns true if
    /// the value is now shown.
    pub fn toggle_password(&mut self, form: &str, field: &str) -> bool {
        let key = (form.to_string(), field.to_string());
        let revealed = if self.revealed.remove(&key) {
            false
        } else {
            self.revealed.insert(key);
            true
        };
        self.host.set_revealed(form, field, revealed);
        debug!("Password field '{}/{}' revealed: {}", form, field, revealed);
        revealed
    }

    /// Whether a password field currently shows its value.
    pub fn is_revealed(&self, form: &str, field: &str) -> bool {
        self.revealed.contains(&(form.to_string(), field.to_string()))
    }

    /// The open dialog, if any.
    pub fn visible_dialog(&self) -> Option<&DialogId> {
        self.dialogs.registry().visible()
    }

    /// True if some dialog is open.
    pub fn is_any_open(&self) -> bool {
        self.dialogs.is_any_open()
    }

    /// Registered dialogs and their visibility. Debug use.
    pub fn list_dialogs(&self) -> &[DialogDescriptor] {
        self.dialogs.registry().descriptors()
    }

    /// Open a dialog by id, registering it first if the page has it but it
    /// was not wired at startup. Debug use.
    pub fn force_open(&mut self, id: &str) {
        let id = DialogId::from(id);
        self.dialogs.register(id.clone(), &self.host);
        self.dialogs.open(&id, &mut self.host);
    }

    /// Errors currently displayed.
    pub fn errors(&self) -> &ErrorPresenter {
        &self.errors
    }

    /// The host page.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host page, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Active configuration.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }
}
