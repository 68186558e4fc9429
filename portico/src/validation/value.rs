//! Field values as read from a submitted form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Current value of one form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text-like input (text, email, password).
    Text(String),
    /// Checkbox state.
    Checked(bool),
}

impl FieldValue {
    /// Text content; a checkbox reads as `"on"` when checked, empty otherwise.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Checked(true) => "on",
            Self::Checked(false) => "",
        }
    }

    /// Whether the control counts as checked.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Checked(checked) => *checked,
            Self::Text(s) => matches!(s.trim(), "on" | "true" | "1"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Checked(b)
    }
}

/// Named field values of one form submission.
///
/// Lookups return `None` for fields the form does not contain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    fields: HashMap<String, FieldValue>,
}

impl FormValues {
    /// Create an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Add a checkbox field.
    pub fn checkbox(mut self, name: impl Into<String>, checked: bool) -> Self {
        self.fields.insert(name.into(), FieldValue::Checked(checked));
        self
    }

    /// Set a field value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Value of a field by exact name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Value of the first present name among `names`.
    pub fn lookup(&self, names: &[String]) -> Option<&FieldValue> {
        names.iter().find_map(|name| self.fields.get(name))
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
