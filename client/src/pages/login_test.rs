use super::*;

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ada@example.com ", "secret"),
        Ok(("ada@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("a@b.com", " spaced "),
        Ok(("a@b.com".to_owned(), " spaced ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email address."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("ada", "secret"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your password."));
}

// =============================================================
// sign_in_error_message
// =============================================================

#[test]
fn rejected_credentials_get_friendly_message() {
    for status in [400, 401, 422] {
        assert_eq!(sign_in_error_message(&SessionError::Status(status)), "Invalid email or password.");
    }
}

#[test]
fn transport_failure_message() {
    assert_eq!(
        sign_in_error_message(&SessionError::Transport("offline".to_owned())),
        "Could not reach the sign-in service."
    );
}

#[test]
fn other_failures_include_error_text() {
    assert_eq!(
        sign_in_error_message(&SessionError::Status(500)),
        "Sign-in failed: session backend returned status 500"
    );
}
