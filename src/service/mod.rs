//! Service Layer
//!
//! Business logic and data access layer for the account service.

pub mod account;
pub mod blacklist;

// Re-export services
pub use account::{AccountService, AccountServiceError, AccountServiceResult};
pub use blacklist::TokenBlacklist;
