//! Host page abstraction.
//!
//! The page (DOM, CSS) is an external collaborator. Dialog and field
//! presentation go through these traits so the core never touches a real
//! document. [`MemoryPage`] is the in-memory implementation used by the CLI
//! driver and the tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::dialog::DialogId;

/// Resolves whether the page contains a dialog element.
pub trait DialogLookup {
    /// Returns true if a dialog element with this id exists.
    fn has_dialog(&self, id: &DialogId) -> bool;
}

/// Page-level side effects driven by the dialog controller.
pub trait PageHost: DialogLookup {
    /// Show or hide a dialog element.
    fn set_dialog_visible(&mut self, id: &DialogId, visible: bool);

    /// Engage or release the page scroll lock and the body "dialog-open" flag.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Field-level presentation driven by the error presenter.
pub trait FieldSurface {
    /// Add or remove the invalid mark on a field.
    fn mark_invalid(&mut self, form: &str, field: &str, invalid: bool);

    /// Append an error message element next to a field.
    fn attach_message(&mut self, form: &str, field: &str, message: &str);

    /// Remove the error message element next to a field, if any.
    fn remove_message(&mut self, form: &str, field: &str);

    /// Move keyboard focus to a field.
    fn focus(&mut self, form: &str, field: &str);

    /// Show a password field's value as plain text, or mask it again.
    fn set_revealed(&mut self, form: &str, field: &str, revealed: bool);
}

/// Presentation state of a single field on a [`MemoryPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMarks {
    /// Whether the field carries the invalid mark.
    pub invalid: bool,
    /// Error message elements attached next to the field.
    pub messages: Vec<String>,
    /// Whether a password field shows its value as plain text.
    pub revealed: bool,
}

/// In-memory page used by the driver and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    dialogs: BTreeSet<DialogId>,
    visible: BTreeSet<DialogId>,
    scroll_locked: bool,
    lock_history: Vec<bool>,
    fields: BTreeMap<(String, String), FieldMarks>,
    focused: Option<(String, String)>,
}

impl MemoryPage {
    /// Create an empty page with no dialog elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page containing the given dialog elements.
    pub fn with_dialogs<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<DialogId>,
    {
        Self {
            dialogs: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a page carrying the login, registration and legacy auth dialogs.
    pub fn standard() -> Self {
        Self::with_dialogs(crate::dialog::STANDARD_DIALOGS.iter().copied())
    }

    /// Whether the dialog element is currently displayed.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.iter().any(|v| v.as_str() == id)
    }

    /// Ids of all displayed dialog elements.
    pub fn visible_dialogs(&self) -> Vec<DialogId> {
        self.visible.iter().cloned().collect()
    }

    /// Whether the scroll lock is engaged.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Every scroll-lock change requested so far, in order.
    pub fn lock_history(&self) -> &[bool] {
        &self.lock_history
    }

    /// Presentation state of a field, if it was ever touched.
    pub fn field(&self, form: &str, field: &str) -> Option<&FieldMarks> {
        self.fields.get(&(form.to_string(), field.to_string()))
    }

    /// Number of error message elements across a form.
    pub fn message_count(&self, form: &str) -> usize {
        self.fields
            .iter()
            .filter(|((f, _), _)| f == form)
            .map(|(_, marks)| marks.messages.len())
            .sum()
    }

    /// Form and field holding keyboard focus, if any.
    pub fn focused(&self) -> Option<(&str, &str)> {
        self.focused
            .as_ref()
            .map(|(form, field)| (form.as_str(), field.as_str()))
    }

    fn field_mut(&mut self, form: &str, field: &str) -> &mut FieldMarks {
        self.fields
            .entry((form.to_string(), field.to_string()))
            .or_default()
    }
}

impl DialogLookup for MemoryPage {
    fn has_dialog(&self, id: &DialogId) -> bool {
        self.dialogs.contains(id)
    }
}

impl PageHost for MemoryPage {
    fn set_dialog_visible(&mut self, id: &DialogId, visible: bool) {
        if !self.dialogs.contains(id) {
            return;
        }
        if visible {
            self.visible.insert(id.clone());
        } else {
            self.visible.remove(id);
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.lock_history.push(locked);
    }
}

impl FieldSurface for MemoryPage {
    fn mark_invalid(&mut self, form: &str, field: &str, invalid: bool) {
        self.field_mut(form, field).invalid = invalid;
    }

    fn attach_message(&mut self, form: &str, field: &str, message: &str) {
        self.field_mut(form, field).messages.push(message.to_string());
    }

    fn remove_message(&mut self, form: &str, field: &str) {
        // Only the first message element is removed, as a DOM query would.
        let marks = self.field_mut(form, field);
        if !marks.messages.is_empty() {
            marks.messages.remove(0);
        }
    }

    fn focus(&mut self, form: &str, field: &str) {
        self.focused = Some((form.to_string(), field.to_string()));
    }

    fn set_revealed(&mut self, form: &str, field: &str, revealed: bool) {
        self.field_mut(form, field).revealed = revealed;
    }
}
