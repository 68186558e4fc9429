//! Validator builder for the fluent validation API.

use log::debug;

use super::result::{ValidationReport, ValidationResult};
use super::rules::{Presence, Rule};
use super::value::FormValues;

/// A field and the rules applied to it.
#[derive(Debug, Clone)]
struct FieldEntry {
    /// Canonical id reported in results.
    id: String,
    /// Names the field may appear under, canonical id first.
    names: Vec<String>,
    presence: Presence,
    rules: Vec<(Rule, String)>,
}

impl FieldEntry {
    fn evaluate(&self, values: &FormValues) -> Option<ValidationResult> {
        let Some(value) = values.lookup(&self.names) else {
            return match self.presence {
                Presence::IfPresent => None,
                Presence::Required => Some(match self.rules.first() {
                    Some((_, msg)) => ValidationResult::fail(&self.id, msg),
                    None => ValidationResult::pass(&self.id),
                }),
            };
        };

        // Within a field only the first failing rule is reported.
        let failed = self
            .rules
            .iter()
            .find(|(rule, _)| !rule.check(value, values));
        Some(match failed {
            Some((_, msg)) => ValidationResult::fail(&self.id, msg),
            None => ValidationResult::pass(&self.id),
        })
    }
}

/// Builder for validating multiple form fields.
///
/// Fields are evaluated in the order they were added and no field
/// short-circuits another.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field(self, id: impl Into<String>) -> FieldBuilder {
        let id = id.into();
        FieldBuilder {
            validator: self,
            entry: FieldEntry {
                names: vec![id.clone()],
                id,
                presence: Presence::Required,
                rules: Vec::new(),
            },
        }
    }

    /// Run every rule against `values`.
    pub fn validate(&self, values: &FormValues) -> ValidationReport {
        let results: Vec<_> = self
            .fields
            .iter()
            .filter_map(|field| field.evaluate(values))
            .collect();
        for result in results.iter().filter(|r| !r.valid) {
            debug!(
                "Field '{}' invalid: {}",
                result.field_id,
                result.message.as_deref().unwrap_or_default()
            );
        }
        ValidationReport::new(results)
    }
}

/// Builder for adding rules to a single field.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    validator: Validator,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Also look the field up under this name.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.entry.names.push(name.into());
        self
    }

    /// Skip the field entirely when the form does not contain it.
    pub fn if_present(mut self) -> Self {
        self.entry.presence = Presence::IfPresent;
        self
    }

    /// Add a rule with its failure message.
    pub fn rule(mut self, rule: Rule, msg: impl Into<String>) -> Self {
        self.entry.rules.push((rule, msg.into()));
        self
    }

    /// Require a non-blank value.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(Rule::Required, msg)
    }

    /// Require an email-shaped value.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(Rule::Email, msg)
    }

    /// Require at least `min` characters.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(Rule::MinLength(min), msg)
    }

    /// Require the value to equal another field (looked up by any of `names`).
    pub fn equals_field<I, S>(self, names: I, msg: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.rule(Rule::Equals(names), msg)
    }

    /// Require the checkbox to be checked.
    pub fn checked(self, msg: impl Into<String>) -> Self {
        self.rule(Rule::Checked, msg)
    }

    /// Continue to the next field.
    pub fn field(self, id: impl Into<String>) -> FieldBuilder {
        self.build().field(id)
    }

    /// Finalize and run all rules.
    pub fn validate(self, values: &FormValues) -> ValidationReport {
        self.build().validate(values)
    }

    /// Finalize this field and return the validator.
    pub fn build(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(self.entry);
        validator
    }
}
