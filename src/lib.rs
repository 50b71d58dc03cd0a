//! Account Service Library
//!
//! A user-account management library providing credential, profile, address,
//! and role mutations against a relational store, plus logout via a Redis
//! token blacklist. Designed as a library layer behind an unspecified API
//! surface: routing, token issuance, and caller authorization belong to the
//! embedding application.
//!
//! # Features
//!
//! - **Credential Management**: Password changes with bcrypt hashing and
//!   current-password verification
//! - **Profile Mutations**: Name, mobile number, and partial address updates,
//!   each returning a refreshed profile projection
//! - **Role Management**: Role overwrite by email, trusting the caller's
//!   authorization
//! - **Token Blacklist**: Logout as a self-expiring Redis deny list
//! - **Database Integration**: SQLite with connection pooling and bundled
//!   migrations
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use account_service::{AccountService, TokenBlacklist, UpdateNameRequest};
//! use account_service::database::DatabaseConfig;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = DatabaseConfig::default().create_pool().await?;
//!     account_service::database::run_migrations(&pool).await?;
//!
//!     let accounts = AccountService::new(pool);
//!     let user_id = Uuid::new_v4(); // resolved by the embedding layer
//!
//!     let profile = accounts
//!         .update_name(user_id, UpdateNameRequest { name: "Alice Smith".into() })
//!         .await?;
//!     println!("Updated profile for {}", profile.email);
//!
//!     let mut blacklist = TokenBlacklist::new("redis://127.0.0.1:6379").await?;
//!     blacklist.logout("access-token", "refresh-token").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized into several layers:
//!
//! - **Service Layer**: Business logic for account mutations and the token
//!   blacklist
//! - **Models**: Entities, the profile projection, and validated request types
//! - **Database**: Connection management and migrations
//! - **Config**: Environment-driven settings
//! - **Utils**: Shared utilities for security, validation, and error handling
//!
//! # Concurrency
//!
//! All operations are per-request async with no in-process locks. Uniqueness
//! pre-checks (mobile number) are advisory; the schema's UNIQUE constraints
//! are the final authority under concurrent writes. No transaction spans two
//! operations, so an update-then-reload pair may observe interleaved changes.

/// Configuration management for all service settings
pub mod config;

/// Database connection management and configuration
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Business logic: account mutations and token blacklist
pub mod service;

/// Shared utilities for security, validation, and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use models::{
    Address, AddressView, ChangePasswordRequest, LogoutResponse, Profile, Role,
    UpdateAddressRequest, UpdateMobileNumberRequest, UpdateNameRequest, UpdateRoleRequest, User,
};
pub use service::{AccountService, AccountServiceError, AccountServiceResult, TokenBlacklist};
pub use utils::error::{AppError, AppResult};

// Re-export database utilities for configuration
pub use database::{DatabaseConfig, DatabasePool};

// Re-export configuration system
pub use config::AppConfig;

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
