//! Inline error presentation for form fields.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::host::FieldSurface;
use crate::validation::ValidationReport;

/// Error messages currently displayed in one form, keyed by field id.
pub type FormErrorState = BTreeMap<String, String>;

/// Tracks and displays field errors, one [`FormErrorState`] per form.
///
/// Showing an error replaces any message already attached to the field, so
/// a field never carries more than one.
#[derive(Debug, Clone, Default)]
pub struct ErrorPresenter {
    forms: HashMap<String, FormErrorState>,
}

impl ErrorPresenter {
    /// Create a presenter with no displayed errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a field invalid and attach `message` next to it.
    pub fn show_error<S: FieldSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        form: &str,
        field: &str,
        message: &str,
    ) {
        self.clear_error(surface, form, field);
        surface.mark_invalid(form, field, true);
        surface.attach_message(form, field, message);
        self.forms
            .entry(form.to_string())
            .or_default()
            .insert(field.to_string(), message.to_string());
    }

    /// Remove a field's mark and message. No-op when none is shown.
    pub fn clear_error<S: FieldSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        form: &str,
        field: &str,
    ) {
        let Some(errors) = self.forms.get_mut(form) else {
            return;
        };
        if errors.remove(field).is_none() {
            return;
        }
        surface.mark_invalid(form, field, false);
        surface.remove_message(form, field);
    }

    /// Remove every error shown in a form.
    pub fn clear_form<S: FieldSurface + ?Sized>(&mut self, surface: &mut S, form: &str) {
        let Some(errors) = self.forms.remove(form) else {
            return;
        };
        for field in errors.keys() {
            surface.mark_invalid(form, field, false);
            surface.remove_message(form, field);
        }
    }

    /// Replace the errors of a form with the failures in `report`.
    pub fn present<S: FieldSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        form: &str,
        report: &ValidationReport,
    ) {
        self.clear_form(surface, form);
        for result in report.errors() {
            let message = result.message.as_deref().unwrap_or_default();
            self.show_error(surface, form, &result.field_id, message);
        }
        debug!("Form '{}': {} error(s) shown", form, report.error_count());
    }

    /// Errors currently displayed in a form.
    pub fn errors(&self, form: &str) -> Option<&FormErrorState> {
        self.forms.get(form).filter(|errors| !errors.is_empty())
    }

    /// Message displayed next to a field, if any.
    pub fn error(&self, form: &str, field: &str) -> Option<&str> {
        self.forms
            .get(form)
            .and_then(|errors| errors.get(field))
            .map(String::as_str)
    }
}
