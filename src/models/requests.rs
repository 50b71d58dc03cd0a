//! Request and Response Models
//!
//! Data structures for operation payloads with validation. The caller-facing
//! API surface (routing, extraction) is out of scope; these types are the
//! contract an embedding layer validates against.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::Role;
use crate::utils::validation::{
    address_field_validator, email_validator, mobile_validator, name_validator, pin_validator,
};

/// Request payload for changing a user's password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password, verified against the stored hash before any change
    #[validate(length(min = 1, message = "Current password cannot be empty"))]
    pub current_password: String,

    /// New password (8-128 characters with strength requirements)
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: String,
}

/// Request payload for updating a user's display name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNameRequest {
    /// New display name (1-255 characters)
    #[validate(custom(function = "name_validator"))]
    pub name: String,
}

/// Request payload for updating a user's mobile number
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMobileNumberRequest {
    /// New mobile number (must not be held by any user)
    #[validate(custom(function = "mobile_validator"))]
    pub mobile: String,
}

/// Request payload for a partial address update.
///
/// Every field carries a presence flag: `None` means "keep the stored value",
/// `Some` means "overwrite with this". The stored columns are non-nullable, so
/// absence and null cannot be conflated.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    /// Updated street address line
    #[validate(custom(function = "address_field_validator"))]
    pub address_line: Option<String>,

    /// Updated landmark
    #[validate(custom(function = "address_field_validator"))]
    pub landmark: Option<String>,

    /// Updated city
    #[validate(custom(function = "address_field_validator"))]
    pub city: Option<String>,

    /// Updated state or province
    #[validate(custom(function = "address_field_validator"))]
    pub state: Option<String>,

    /// Updated postal/PIN code
    #[validate(custom(function = "pin_validator"))]
    pub pin: Option<String>,

    /// Updated country
    #[validate(custom(function = "address_field_validator"))]
    pub country: Option<String>,
}

/// Request payload for overwriting a user's role, resolved by email.
///
/// Authorization for this operation belongs to the caller; the service
/// performs no identity check of its own.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    /// Email address identifying the target user
    #[validate(custom(function = "email_validator"))]
    pub email: String,

    /// Role to assign
    pub role: Role,
}

/// Acknowledgement returned by a successful logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Validates password strength according to security requirements
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    // Check for at least one lowercase letter
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(ValidationError::new(
            "Password must contain at least one lowercase letter",
        ));
    }

    // Check for at least one uppercase letter
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(ValidationError::new(
            "Password must contain at least one uppercase letter",
        ));
    }

    // Check for at least one digit
    if !password.chars().any(|c| c.is_numeric()) {
        return Err(ValidationError::new(
            "Password must contain at least one digit",
        ));
    }

    // Check for at least one special character
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return Err(ValidationError::new(
            "Password must contain at least one special character",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_validation() {
        // Valid password
        assert!(validate_password_strength("SecurePass123!").is_ok());

        // Missing lowercase
        assert!(validate_password_strength("SECUREPASS123!").is_err());

        // Missing uppercase
        assert!(validate_password_strength("securepass123!").is_err());

        // Missing digit
        assert!(validate_password_strength("SecurePass!").is_err());

        // Missing special character
        assert!(validate_password_strength("SecurePass123").is_err());
    }

    #[test]
    fn test_change_password_request_validation() {
        let request = ChangePasswordRequest {
            current_password: "OldPass123!".to_string(),
            new_password: "NewSecurePass456@".to_string(),
        };
        assert!(request.validate().is_ok());

        let weak = ChangePasswordRequest {
            current_password: "OldPass123!".to_string(),
            new_password: "weak".to_string(),
        };
        assert!(weak.validate().is_err());

        let empty_current = ChangePasswordRequest {
            current_password: "".to_string(),
            new_password: "NewSecurePass456@".to_string(),
        };
        assert!(empty_current.validate().is_err());
    }

    #[test]
    fn test_update_name_request_validation() {
        let request = UpdateNameRequest {
            name: "Jane Doe".to_string(),
        };
        assert!(request.validate().is_ok());

        let invalid = UpdateNameRequest {
            name: "Jane123".to_string(),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_update_mobile_request_validation() {
        let request = UpdateMobileNumberRequest {
            mobile: "+919876543210".to_string(),
        };
        assert!(request.validate().is_ok());

        let invalid = UpdateMobileNumberRequest {
            mobile: "12345".to_string(),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_update_address_request_partial_validation() {
        // Empty request is valid: every field keeps its stored value
        let request = UpdateAddressRequest::default();
        assert!(request.validate().is_ok());

        let request = UpdateAddressRequest {
            city: Some("Mumbai".to_string()),
            pin: Some("400001".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let invalid_pin = UpdateAddressRequest {
            pin: Some("AB12".to_string()),
            ..Default::default()
        };
        assert!(invalid_pin.validate().is_err());

        let blank_city = UpdateAddressRequest {
            city: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank_city.validate().is_err());
    }

    #[test]
    fn test_update_role_request_validation() {
        let request = UpdateRoleRequest {
            email: "admin@example.com".to_string(),
            role: Role::Admin,
        };
        assert!(request.validate().is_ok());

        let invalid = UpdateRoleRequest {
            email: "not-an-email".to_string(),
            role: Role::Admin,
        };
        assert!(invalid.validate().is_err());
    }
}
