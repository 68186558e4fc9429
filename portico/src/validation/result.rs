/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Canonical field id.
    pub field_id: String,
    /// Whether every rule on the field passed.
    pub valid: bool,
    /// Message of the first failing rule.
    pub message: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn pass(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            valid: true,
            message: None,
        }
    }

    /// A failing result with its message.
    pub fn fail(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Results of one validation pass, in rule-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<ValidationResult>,
}

impl ValidationReport {
    /// Build a report from per-field results.
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// True if every evaluated field passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.valid)
    }

    /// True if any evaluated field failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// All per-field results, passing ones included.
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Result for one field, if it was evaluated.
    pub fn result(&self, field_id: &str) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.field_id == field_id)
    }

    /// Failing results only.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Field that should receive focus after a failed pass.
    pub fn first_invalid(&self) -> Option<&str> {
        self.errors().next().map(|r| r.field_id.as_str())
    }
}
