//! Tests for the login and registration rule sets.

use portico::validation::{FormKind, FormValues, Validator, validate_form};

fn valid_registration() -> FormValues {
    FormValues::new()
        .text("firstname", "Ada")
        .text("lastname", "Lovelace")
        .text("email", "ada@example.com")
        .text("password", "longenough1")
        .text("confirm_password", "longenough1")
}

#[test]
fn test_login_missing_email_is_single_failure() {
    let values = FormValues::new().text("email", "").text("password", "x");
    let report = validate_form(FormKind::Login, &values);

    assert!(report.is_invalid());
    assert_eq!(report.error_count(), 1);
    let email = report.result("email").expect("email evaluated");
    assert!(!email.valid);
    assert_eq!(email.message.as_deref(), Some("Email is required"));
    assert!(report.result("password").expect("password evaluated").valid);
}

#[test]
fn test_login_reports_every_field() {
    let values = FormValues::new().text("email", "not-an-email").text("password", "   ");
    let report = validate_form(FormKind::Login, &values);

    let messages: Vec<_> = report
        .errors()
        .map(|r| (r.field_id.as_str(), r.message.as_deref().unwrap_or("")))
        .collect();
    assert_eq!(
        messages,
        vec![
            ("email", "Invalid email format"),
            ("password", "Password is required"),
        ]
    );
}

#[test]
fn test_login_absent_fields_fail() {
    let report = validate_form(FormKind::Login, &FormValues::new());
    assert_eq!(report.error_count(), 2);
    assert_eq!(report.first_invalid(), Some("email"));
}

#[test]
fn test_registration_confirm_mismatch_only() {
    let values = FormValues::new()
        .text("firstname", "A")
        .text("lastname", "B")
        .text("email", "a@b.com")
        .text("password", "longenough1")
        .text("confirm_password", "different");
    let report = validate_form(FormKind::Registration, &values);

    assert!(report.is_invalid());
    assert_eq!(report.error_count(), 1);
    let confirm = report.result("confirm_password").expect("confirm evaluated");
    assert_eq!(confirm.message.as_deref(), Some("Passwords do not match"));
    for field in ["firstname", "lastname", "email", "password"] {
        let result = report.result(field).expect("field evaluated");
        assert!(result.valid, "{field} should be valid");
        assert_eq!(result.message, None);
    }
}

#[test]
fn test_registration_terms_skipped_when_absent() {
    let report = validate_form(FormKind::Registration, &valid_registration());
    assert!(report.is_valid());
    assert!(report.result("accept-terms").is_none());
    assert_eq!(report.results().len(), 5);
}

#[test]
fn test_registration_terms_must_be_checked_when_present() {
    let values = valid_registration().checkbox("accept-terms", false);
    let report = validate_form(FormKind::Registration, &values);
    assert_eq!(report.first_invalid(), Some("accept-terms"));

    let values = valid_registration().checkbox("accept-terms", true);
    assert!(validate_form(FormKind::Registration, &values).is_valid());
}

#[test]
fn test_registration_short_password() {
    let values = valid_registration()
        .text("password", "short")
        .text("confirm_password", "short");
    let report = validate_form(FormKind::Registration, &values);
    assert_eq!(
        report.result("password").and_then(|r| r.message.as_deref()),
        Some("Password must be at least 8 characters")
    );
    assert_eq!(report.error_count(), 1);
}

#[test]
fn test_registration_accepts_field_aliases() {
    let values = FormValues::new()
        .text("first_name", "Ada")
        .text("last_name", "Lovelace")
        .text("email", "ada@example.com")
        .text("password1", "longenough1")
        .text("password2", "longenough1")
        .checkbox("accept_terms", true);
    let report = validate_form(FormKind::Registration, &values);
    assert!(report.is_valid());
    assert_eq!(report.results().len(), 6);
}

#[test]
fn test_registration_missing_confirm_fails() {
    let values = FormValues::new()
        .text("firstname", "Ada")
        .text("lastname", "Lovelace")
        .text("email", "ada@example.com")
        .text("password", "longenough1");
    let report = validate_form(FormKind::Registration, &values);
    assert_eq!(report.first_invalid(), Some("confirm_password"));
}

#[test]
fn test_custom_min_password_length() {
    let values = valid_registration()
        .text("password", "twelve-chars")
        .text("confirm_password", "twelve-chars");
    assert!(FormKind::Registration.validator(12).validate(&values).is_valid());
    assert!(FormKind::Registration.validator(13).validate(&values).is_invalid());
}

#[test]
fn test_first_failing_rule_wins_within_field() {
    let report = Validator::new()
        .field("code")
        .required("required")
        .min_length(4, "too short")
        .validate(&FormValues::new().text("code", " "));
    assert_eq!(
        report.result("code").and_then(|r| r.message.as_deref()),
        Some("required")
    );
}

#[test]
fn test_form_kind_parsing() {
    assert_eq!("login".parse::<FormKind>().ok(), Some(FormKind::Login));
    assert_eq!(" Register ".parse::<FormKind>().ok(), Some(FormKind::Registration));
    assert!("signup".parse::<FormKind>().is_err());
    assert_eq!(FormKind::Registration.to_string(), "registration");
}
