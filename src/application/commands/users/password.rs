pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

/// Every rule the password breaks, in a stable order. Empty when acceptable.
pub(super) fn password_violations(password: &str) -> Vec<String> {
    if password.is_empty() {
        return vec!["password is required".into()];
    }

    let mut violations = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        violations.push(format!(
            "password should contain at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        violations.push("password should contain at least one uppercase letter".into());
    }
    if !password.chars().any(char::is_lowercase) {
        violations.push("password should contain at least one lowercase letter".into());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("password should contain at least one digit".into());
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        violations.push("password should contain at least one latin letter".into());
    }

    violations
}
