use mailmaster_extract::*;

fn valid_register_form() -> RegisterForm {
    RegisterForm {
        full_name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        password: "s3cret-Pass".into(),
        password_confirm: "s3cret-Pass".into(),
        agree_terms: true,
    }
}

// --- Login ---

#[test]
fn test_login_valid() {
    let form = LoginForm {
        email: "  john@example.com ".into(),
        password: "hunter2".into(),
        remember: true,
    };
    let mut errors = FieldErrors::new();

    assert!(form.validate(&mut errors));
    assert!(errors.is_empty());
}

#[test]
fn test_login_empty_fields() {
    let form = LoginForm::default();
    let mut errors = FieldErrors::new();

    assert!(!form.validate(&mut errors));
    assert_eq!(errors.get(Field::LoginEmail), Some("Email is required"));
    assert_eq!(errors.get(Field::LoginPassword), Some("Password is required"));
}

#[test]
fn test_login_malformed_email() {
    let form = LoginForm {
        email: "john@example".into(),
        password: "x".into(),
        remember: false,
    };
    let mut errors = FieldErrors::new();

    assert!(!form.validate(&mut errors));
    assert_eq!(
        errors.get(Field::LoginEmail),
        Some("Please enter a valid email address")
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_login_revalidation_clears_stale_errors() {
    let mut errors = FieldErrors::new();
    assert!(!LoginForm::default().validate(&mut errors));

    let form = LoginForm {
        email: "john@example.com".into(),
        password: "x".into(),
        remember: false,
    };
    assert!(form.validate(&mut errors));
    assert!(errors.is_empty());
}

#[test]
fn test_login_request_json() {
    let form = LoginForm {
        email: " john@example.com ".into(),
        password: "pw".into(),
        remember: true,
    };
    let json = serde_json::to_value(form.to_request()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"email": "john@example.com", "password": "pw", "remember": true})
    );
}

// --- Register ---

#[test]
fn test_register_valid() {
    let mut errors = FieldErrors::new();
    assert!(valid_register_form().validate(&mut errors));
    assert!(errors.is_empty());
}

#[test]
fn test_register_reports_every_failing_field() {
    let form = RegisterForm::default();
    let mut errors = FieldErrors::new();

    assert!(!form.validate(&mut errors));
    assert_eq!(errors.len(), 5);
    assert_eq!(errors.get(Field::RegisterFullName), Some("Full name is required"));
    assert_eq!(errors.get(Field::RegisterEmail), Some("Email is required"));
    assert_eq!(errors.get(Field::RegisterPassword), Some("Password is required"));
    assert_eq!(
        errors.get(Field::RegisterPasswordConfirm),
        Some("Please confirm your password")
    );
    assert_eq!(
        errors.get(Field::AgreeTerms),
        Some("You must agree to the Terms of Service")
    );
}

#[test]
fn test_register_short_values() {
    let form = RegisterForm {
        full_name: " J ".into(),
        password: "short".into(),
        password_confirm: "short".into(),
        ..valid_register_form()
    };
    let mut errors = FieldErrors::new();

    assert!(!form.validate(&mut errors));
    assert_eq!(
        errors.get(Field::RegisterFullName),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(
        errors.get(Field::RegisterPassword),
        Some("Password must be at least 8 characters")
    );
    assert_eq!(errors.get(Field::RegisterPasswordConfirm), None);
}

#[test]
fn test_register_password_mismatch() {
    let form = RegisterForm {
        password_confirm: "different-pass".into(),
        ..valid_register_form()
    };
    let mut errors = FieldErrors::new();

    assert!(!form.validate(&mut errors));
    assert_eq!(
        errors.get(Field::RegisterPasswordConfirm),
        Some("Passwords do not match")
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_register_request_json() {
    let form = RegisterForm {
        full_name: "  Jane Doe ".into(),
        ..valid_register_form()
    };
    let json = serde_json::to_value(form.to_request()).unwrap();

    assert_eq!(json["full_name"], "Jane Doe");
    assert_eq!(json["email"], "jane@example.com");
    assert!(json.get("password_confirm").is_none());
}

#[test]
fn test_field_ids() {
    assert_eq!(Field::LoginEmail.id(), "loginEmail");
    assert_eq!(Field::RegisterPasswordConfirm.to_string(), "registerPasswordConfirm");
    assert_eq!(Field::AgreeTerms.id(), "agreeTerms");
}

// --- Backend responses ---

#[test]
fn test_auth_response_success_defaults() {
    let response: AuthResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();

    assert_eq!(
        response.outcome(AuthKind::Login),
        AuthOutcome::Success {
            message: "Login successful! Redirecting...".into(),
            redirect: "dashboard.php".into(),
        }
    );
}

#[test]
fn test_auth_response_success_with_values() {
    let response: AuthResponse = serde_json::from_str(
        r#"{"success": true, "message": "Welcome", "redirect": "lists.php"}"#,
    )
    .unwrap();

    assert_eq!(
        response.outcome(AuthKind::Register),
        AuthOutcome::Success {
            message: "Welcome".into(),
            redirect: "lists.php".into(),
        }
    );
}

#[test]
fn test_auth_response_failure_fallbacks() {
    let response = AuthResponse::default();

    assert_eq!(
        response.outcome(AuthKind::Login),
        AuthOutcome::Failure {
            message: "Login failed. Please try again.".into()
        }
    );
    assert_eq!(
        response.outcome(AuthKind::Register),
        AuthOutcome::Failure {
            message: "Registration failed. Please try again.".into()
        }
    );
}

#[test]
fn test_auth_response_failure_message() {
    let response: AuthResponse =
        serde_json::from_str(r#"{"success": false, "message": "Email already registered"}"#)
            .unwrap();

    assert_eq!(
        response.outcome(AuthKind::Register),
        AuthOutcome::Failure {
            message: "Email already registered".into()
        }
    );
}

// --- Password strength ---

#[test]
fn test_password_strength_empty() {
    assert_eq!(PasswordStrength::of(""), None);
}

#[test]
fn test_password_strength_levels() {
    assert_eq!(PasswordStrength::of("abc"), Some(PasswordStrength::Weak));
    assert_eq!(PasswordStrength::score("abcdefgh"), 2);
    assert_eq!(PasswordStrength::of("abcdefgh1"), Some(PasswordStrength::Medium));
    assert_eq!(PasswordStrength::of("Abcdefgh1"), Some(PasswordStrength::Medium));
    assert_eq!(PasswordStrength::of("Abcdefgh1!"), Some(PasswordStrength::Strong));
    assert_eq!(PasswordStrength::score("Abcdefghijk1!"), 6);
}

#[test]
fn test_password_strength_labels() {
    assert_eq!(PasswordStrength::Weak.label(), "Weak password");
    assert_eq!(PasswordStrength::Medium.label(), "Medium strength");
    assert_eq!(PasswordStrength::Strong.label(), "Strong password");
}
