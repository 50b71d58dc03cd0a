//! Profile Projection
//!
//! The canonical external view of a user: the stored fields a caller may see,
//! excluding internal fields such as the password hash. Every mutating
//! operation that returns a fresh view returns this projection.

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Address, Role, User};

/// External projection of a user's address.
///
/// Carries no back-reference to the owning user; the projection is always
/// reached through its owner.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddressView {
    pub id: Uuid,
    pub address_line: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
    pub pin: String,
    pub country: String,
}

impl From<Address> for AddressView {
    fn from(address: Address) -> Self {
        AddressView {
            id: address.id,
            address_line: address.address_line,
            landmark: address.landmark,
            city: address.city,
            state: address.state,
            pin: address.pin,
            country: address.country,
        }
    }
}

/// External projection of a user account with its addresses
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub role: Role,
    pub addresses: Vec<AddressView>,
}

impl From<(User, Vec<Address>)> for Profile {
    fn from((user, addresses): (User, Vec<Address>)) -> Self {
        Profile {
            name: user.name,
            email: user.email,
            mobile: user.mobile,
            role: user.role,
            addresses: addresses.into_iter().map(AddressView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            mobile: "9876543210".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_address(user_id: Uuid) -> Address {
        Address {
            id: Uuid::new_v4(),
            user_id,
            address_line: "221B Baker Street".to_string(),
            landmark: "Near Regent's Park".to_string(),
            city: "London".to_string(),
            state: "Greater London".to_string(),
            pin: "560001".to_string(),
            country: "UK".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_profile_projection_fields() {
        let user = sample_user();
        let address = sample_address(user.id);
        let address_id = address.id;

        let profile = Profile::from((user, vec![address]));

        assert_eq!(profile.name, "Test User");
        assert_eq!(profile.email, "test@example.com");
        assert_eq!(profile.mobile, "9876543210");
        assert_eq!(profile.role, Role::User);
        assert_eq!(profile.addresses.len(), 1);
        assert_eq!(profile.addresses[0].id, address_id);
        assert_eq!(profile.addresses[0].city, "London");
    }

    #[test]
    fn test_profile_serialization_has_no_internal_fields() {
        let user = sample_user();
        let address = sample_address(user.id);

        let profile = Profile::from((user, vec![address]));
        let json = serde_json::to_value(&profile).unwrap();

        assert!(json.get("password_hash").is_none());
        assert!(json.get("id").is_none());
        assert!(json["addresses"][0].get("user_id").is_none());
    }
}
