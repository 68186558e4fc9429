//! Built-in field rules.

use std::sync::LazyLock;

use regex::Regex;

use super::value::{FieldValue, FormValues};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check the loose email shape accepted by the auth forms.
///
/// One `@` with something before it, and a dotted part after it with
/// non-empty segments on both sides of a dot. No whitespace anywhere.
pub fn is_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Whether a field's absence is itself a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    /// A missing field fails with the message of its first rule.
    #[default]
    Required,
    /// A missing field is skipped and produces no result.
    IfPresent,
}

/// A validation predicate over one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// Matches [`is_email_shape`].
    Email,
    /// At least this many UTF-16 code units, untrimmed, as a browser counts.
    MinLength(usize),
    /// Equal to another field, looked up by any of these names.
    /// Passes when the other field is absent.
    Equals(Vec<String>),
    /// Checkbox is checked.
    Checked,
}

impl Rule {
    /// Evaluate the rule against a field value.
    pub fn check(&self, value: &FieldValue, values: &FormValues) -> bool {
        match self {
            Rule::Required => !value.as_text().trim().is_empty(),
            Rule::Email => is_email_shape(value.as_text()),
            Rule::MinLength(min) => value.as_text().encode_utf16().count() >= *min,
            Rule::Equals(other) => values
                .lookup(other)
                .is_none_or(|other| other.as_text() == value.as_text()),
            Rule::Checked => value.is_checked(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_email_shape("a@b.co"));
        assert!(is_email_shape("first.last@sub.example.org"));
        assert!(!is_email_shape("a@b"));
        assert!(!is_email_shape("a@@b.com"));
        assert!(!is_email_shape("a b@c.com"));
        assert!(!is_email_shape("@b.com"));
        assert!(!is_email_shape("a@.com"));
        assert!(!is_email_shape("a@b."));
        assert!(!is_email_shape(" a@b.com"));
    }

    #[test]
    fn test_required_trims() {
        let values = FormValues::new();
        assert!(!Rule::Required.check(&"   ".into(), &values));
        assert!(Rule::Required.check(&" x ".into(), &values));
        assert!(!Rule::Required.check(&false.into(), &values));
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        let values = FormValues::new();
        assert!(Rule::MinLength(8).check(&"éééééééé".into(), &values));
        assert!(!Rule::MinLength(8).check(&"1234567".into(), &values));
        // Astral characters take two units each.
        assert!(Rule::MinLength(8).check(&"😀😀😀😀".into(), &values));
        assert!(!Rule::MinLength(8).check(&"😀😀😀".into(), &values));
    }

    #[test]
    fn test_equals_passes_without_counterpart() {
        let rule = Rule::Equals(vec!["password".to_string()]);
        let values = FormValues::new();
        assert!(rule.check(&"anything".into(), &values));

        let values = FormValues::new().text("password", "secret123");
        assert!(rule.check(&"secret123".into(), &values));
        assert!(!rule.check(&"secret124".into(), &values));
    }

    #[test]
    fn test_checked_accepts_form_encodings() {
        let values = FormValues::new();
        assert!(Rule::Checked.check(&true.into(), &values));
        assert!(Rule::Checked.check(&"on".into(), &values));
        assert!(!Rule::Checked.check(&"".into(), &values));
        assert!(!Rule::Checked.check(&false.into(), &values));
    }
}
