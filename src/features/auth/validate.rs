//! Client-side form rules for early UX feedback. The backend re-validates
//! everything; a rejection here only means the request is never sent.

/// Minimum password length enforced by the client.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Minimum phone number length enforced by the client.
pub const MIN_PHONE_LENGTH: usize = 10;

/// Checks the registration form and returns the first failing rule's message.
pub fn validate_registration(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if name.trim().is_empty()
        || email.trim().is_empty()
        || phone.trim().is_empty()
        || password.trim().is_empty()
        || confirm_password.trim().is_empty()
    {
        return Err("All fields are required.".to_string());
    }

    if !email.contains('@') {
        return Err("Email address looks invalid.".to_string());
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long."
        ));
    }

    if password != confirm_password {
        return Err("Passwords do not match.".to_string());
    }

    if phone.trim().len() < MIN_PHONE_LENGTH {
        return Err("Please enter a valid phone number.".to_string());
    }

    Ok(())
}

/// Rough password score in `0..=5`, rendered as a strength meter.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.len() >= MIN_PASSWORD_LENGTH {
        score += 1;
    }
    if password.len() >= 10 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 | 1 => "Weak",
        2 | 3 => "Fair",
        _ => "Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::{password_strength, strength_label, validate_registration};

    #[test]
    fn rejects_short_passwords_without_sending() {
        let result = validate_registration("Ada", "ada@example.com", "0123456789", "abc12", "abc12");
        assert_eq!(
            result,
            Err("Password must be at least 6 characters long.".to_string())
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let result =
            validate_registration("Ada", "ada@example.com", "0123456789", "secret1", "secret2");
        assert_eq!(result, Err("Passwords do not match.".to_string()));
    }

    #[test]
    fn rejects_short_phone_numbers() {
        let result =
            validate_registration("Ada", "ada@example.com", "12345", "secret1", "secret1");
        assert_eq!(result, Err("Please enter a valid phone number.".to_string()));
    }

    #[test]
    fn rejects_blank_fields_first() {
        let result = validate_registration(" ", "ada@example.com", "0123456789", "abc", "xyz");
        assert_eq!(result, Err("All fields are required.".to_string()));
    }

    #[test]
    fn accepts_a_valid_form() {
        let result =
            validate_registration("Ada", "ada@example.com", "0123456789", "secret1", "secret1");
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn strength_scores_grow_with_variety() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdef"), 1);
        assert!(password_strength("Abcdef1!") >= 4);
        assert_eq!(password_strength("Abcdefgh12!"), 5);
    }

    #[test]
    fn strength_labels_cover_the_range() {
        assert_eq!(strength_label(0), "Weak");
        assert_eq!(strength_label(3), "Fair");
        assert_eq!(strength_label(5), "Strong");
    }
}
