//! Validation Utilities
//!
//! Input validation functions for account data and request payloads.

use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

/// Validates email address format using a comprehensive regex pattern
pub fn validate_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    regex.is_match(email)
}

/// Normalizes email address to lowercase and removes whitespace
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates that a name contains only allowed characters and length
pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();

    // Name must be between 1 and 255 characters
    if trimmed.is_empty() || trimmed.len() > 255 {
        return false;
    }

    // Allow letters, spaces, hyphens, and apostrophes
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = NAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("Failed to compile name regex"));

    regex.is_match(trimmed)
}

/// Validates mobile number format: optional leading `+`, 10-15 digits
pub fn validate_mobile(mobile: &str) -> bool {
    static MOBILE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = MOBILE_REGEX
        .get_or_init(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("Failed to compile mobile regex"));

    regex.is_match(mobile)
}

/// Validates a postal/PIN code: 4-10 digits
pub fn validate_pin(pin: &str) -> bool {
    static PIN_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        PIN_REGEX.get_or_init(|| Regex::new(r"^[0-9]{4,10}$").expect("Failed to compile pin regex"));

    regex.is_match(pin)
}

/// Validates a free-form address field (1-255 characters, not blank)
pub fn validate_address_field(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.len() <= 255
}

/// Custom validator for email fields using the validator crate
pub fn email_validator(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email"))
    }
}

/// Custom validator for name fields using the validator crate
pub fn name_validator(name: &str) -> Result<(), ValidationError> {
    if validate_name(name) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_name"))
    }
}

/// Custom validator for mobile number fields using the validator crate
pub fn mobile_validator(mobile: &str) -> Result<(), ValidationError> {
    if validate_mobile(mobile) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_mobile"))
    }
}

/// Custom validator for PIN code fields using the validator crate
pub fn pin_validator(pin: &str) -> Result<(), ValidationError> {
    if validate_pin(pin) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_pin"))
    }
}

/// Custom validator for free-form address fields using the validator crate
pub fn address_field_validator(value: &str) -> Result<(), ValidationError> {
    if validate_address_field(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_address_field"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("test.user+tag@domain.co.uk"));
        assert!(!validate_email("invalid.email"));
        assert!(!validate_email("@domain.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  USER@EXAMPLE.COM  "), "user@example.com");
        assert_eq!(normalize_email("Test@Domain.org"), "test@domain.org");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("John Doe"));
        assert!(validate_name("Mary-Jane O'Connor"));
        assert!(!validate_name(""));
        assert!(!validate_name("John123"));
        assert!(!validate_name("John@Doe"));
        assert!(!validate_name(&"a".repeat(256))); // Too long
    }

    #[test]
    fn test_validate_mobile() {
        assert!(validate_mobile("9876543210"));
        assert!(validate_mobile("+919876543210"));
        assert!(!validate_mobile("12345")); // Too short
        assert!(!validate_mobile("98765abc10"));
        assert!(!validate_mobile(""));
    }

    #[test]
    fn test_validate_pin() {
        assert!(validate_pin("560001"));
        assert!(validate_pin("1234"));
        assert!(!validate_pin("12"));
        assert!(!validate_pin("ABC123"));
        assert!(!validate_pin(""));
    }

    #[test]
    fn test_validate_address_field() {
        assert!(validate_address_field("221B Baker Street"));
        assert!(!validate_address_field("   "));
        assert!(!validate_address_field(&"a".repeat(256)));
    }
}
