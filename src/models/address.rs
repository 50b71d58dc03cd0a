//! Address Model
//!
//! Address records owned by a user. The user is the aggregate root; an
//! address row is meaningless without its owner and is removed with it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Full stored address record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Address {
    /// Unique identifier for the address
    pub id: Uuid,

    /// Owning user (back-reference, not ownership)
    pub user_id: Uuid,

    /// Street address line
    pub address_line: String,

    /// Nearby landmark
    pub landmark: String,

    /// City name
    pub city: String,

    /// State or province
    pub state: String,

    /// Postal/PIN code
    pub pin: String,

    /// Country name
    pub country: String,

    /// Timestamp when the address was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the address was last modified
    pub updated_at: DateTime<Utc>,
}
