use super::*;

#[test]
fn validate_registration_accepts_matching_passwords() {
    assert_eq!(
        validate_registration(" user@example.com ", "hunter22", "hunter22"),
        Ok(("user@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_registration_requires_email() {
    assert_eq!(
        validate_registration("   ", "hunter22", "hunter22"),
        Err("Enter an email address.")
    );
}

#[test]
fn validate_registration_enforces_minimum_password_length() {
    assert_eq!(
        validate_registration("user@example.com", "short", "short"),
        Err("Password must be at least 6 characters long")
    );
}

#[test]
fn validate_registration_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_registration("user@example.com", "hunter22", "hunter23"),
        Err("Passwords do not match")
    );
}
