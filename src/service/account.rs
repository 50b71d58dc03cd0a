//! Account Service Implementation
//!
//! Core business logic for account mutations: credentials, profile fields,
//! addresses, and roles. Every mutation follows the same shape: load,
//! validate against stored state, write, then reload the canonical profile
//! when the caller needs a fresh view. The store is the single source of
//! truth; no user state is cached in-process.

use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    Address, ChangePasswordRequest, Profile, UpdateAddressRequest, UpdateMobileNumberRequest,
    UpdateNameRequest, UpdateRoleRequest, User,
};
use crate::utils::{
    error::AppError,
    security::{hash_password_with_cost, verify_password, DEFAULT_BCRYPT_COST},
    validation::normalize_email,
};

/// Custom error types for the account service
#[derive(Error, Debug)]
pub enum AccountServiceError {
    /// User with the specified identifier was not found
    #[error("User not found")]
    UserNotFound,

    /// Presented current password does not match the stored hash
    #[error("Current password is incorrect")]
    InvalidCredentials,

    /// Target mobile number is already held by a user
    #[error("Mobile number already in use")]
    MobileNumberTaken,

    /// Address does not exist or belongs to a different user
    #[error("Address not found for this user")]
    AddressNotOwned,

    /// Input validation failed with detailed error message
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing operation failed
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl From<AccountServiceError> for AppError {
    fn from(err: AccountServiceError) -> Self {
        match err {
            AccountServiceError::UserNotFound => AppError::NotFound("User not found".to_string()),
            AccountServiceError::InvalidCredentials => {
                AppError::Validation("Current password is incorrect".to_string())
            }
            AccountServiceError::MobileNumberTaken => {
                AppError::Validation("Mobile number already in use".to_string())
            }
            AccountServiceError::AddressNotOwned => {
                AppError::Validation("Address not found for this user".to_string())
            }
            AccountServiceError::Validation(msg) => AppError::Validation(msg),
            AccountServiceError::Database(e) => AppError::Database(e),
            AccountServiceError::Hashing(e) => AppError::Hashing(e),
        }
    }
}

/// Result type for account service operations
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

const USER_COLUMNS: &str = "id, name, email, mobile, password_hash, role, created_at, updated_at";
const ADDRESS_COLUMNS: &str =
    "id, user_id, address_line, landmark, city, state, pin, country, created_at, updated_at";

/// Core account service providing profile, credential, and role mutations.
///
/// Constructed with an injected database pool; there is no ambient or global
/// state. Uniqueness checks are advisory fast paths; the UNIQUE constraints
/// in the schema remain the final authority under concurrent writes.
#[derive(Clone)]
pub struct AccountService {
    /// Database connection pool for efficient connection management
    db_pool: SqlitePool,

    /// bcrypt cost factor for password hashing (higher = more secure but slower)
    bcrypt_cost: u32,
}

impl AccountService {
    /// Creates a new AccountService instance with the provided database connection pool
    pub fn new(db_pool: SqlitePool) -> Self {
        Self {
            db_pool,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    /// Creates a new AccountService with a custom bcrypt cost
    pub fn with_bcrypt_cost(db_pool: SqlitePool, bcrypt_cost: u32) -> Self {
        Self {
            db_pool,
            bcrypt_cost,
        }
    }

    /// Replaces a user's password after verifying the current one.
    ///
    /// Success is signaled by the absence of an error; nothing is returned.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> AccountServiceResult<()> {
        request.validate().map_err(|e| {
            AccountServiceError::Validation(format!("Invalid password data: {}", e))
        })?;

        let user = self
            .find_by_id(user_id)
            .await?
            .ok_or(AccountServiceError::UserNotFound)?;

        if !verify_password(&request.current_password, &user.password_hash)? {
            return Err(AccountServiceError::InvalidCredentials);
        }

        let new_hash = hash_password_with_cost(&request.new_password, self.bcrypt_cost)?;

        sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(new_hash)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.db_pool)
            .await?;

        debug!(%user_id, "password updated");
        Ok(())
    }

    /// Overwrites the user's display name and returns the refreshed profile
    pub async fn update_name(
        &self,
        user_id: Uuid,
        request: UpdateNameRequest,
    ) -> AccountServiceResult<Profile> {
        request
            .validate()
            .map_err(|e| AccountServiceError::Validation(format!("Invalid name: {}", e)))?;

        if self.find_by_id(user_id).await?.is_none() {
            return Err(AccountServiceError::Validation(
                "User does not exist".to_string(),
            ));
        }

        sqlx::query("UPDATE users SET name = ?, updated_at = ? WHERE id = ?")
            .bind(&request.name)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.db_pool)
            .await?;

        self.get_profile(user_id).await
    }

    /// Overwrites the user's mobile number and returns the refreshed profile.
    ///
    /// The lookup-by-mobile pre-check matches by value only: any holder of the
    /// target number is rejected, including the requesting user re-submitting
    /// their own current number. The pre-check is a fast path; a storage-level
    /// unique violation maps to the same rejection.
    pub async fn update_mobile_number(
        &self,
        user_id: Uuid,
        request: UpdateMobileNumberRequest,
    ) -> AccountServiceResult<Profile> {
        request
            .validate()
            .map_err(|e| AccountServiceError::Validation(format!("Invalid mobile number: {}", e)))?;

        if self.find_by_id(user_id).await?.is_none() {
            return Err(AccountServiceError::Validation(
                "User does not exist".to_string(),
            ));
        }

        if self.find_by_mobile(&request.mobile).await?.is_some() {
            return Err(AccountServiceError::MobileNumberTaken);
        }

        sqlx::query("UPDATE users SET mobile = ?, updated_at = ? WHERE id = ?")
            .bind(&request.mobile)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.db_pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) => {
                    if db_err.is_unique_violation() {
                        AccountServiceError::MobileNumberTaken
                    } else {
                        AccountServiceError::Database(sqlx::Error::Database(db_err))
                    }
                }
                _ => AccountServiceError::Database(e),
            })?;

        self.get_profile(user_id).await
    }

    /// Applies a partial update to one of the user's own addresses and
    /// returns the refreshed profile.
    ///
    /// Only supplied fields change; omitted fields retain their stored
    /// values. The address must belong to the user; an id belonging to a
    /// different user is rejected the same way as an unknown id.
    pub async fn update_address(
        &self,
        user_id: Uuid,
        address_id: Uuid,
        request: UpdateAddressRequest,
    ) -> AccountServiceResult<Profile> {
        request
            .validate()
            .map_err(|e| AccountServiceError::Validation(format!("Invalid address data: {}", e)))?;

        if self.find_by_id(user_id).await?.is_none() {
            return Err(AccountServiceError::Validation(
                "User does not exist".to_string(),
            ));
        }

        let owned: Option<Address> = sqlx::query_as(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = ? AND user_id = ?"
        ))
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(&self.db_pool)
        .await?;

        if owned.is_none() {
            return Err(AccountServiceError::AddressNotOwned);
        }

        sqlx::query(
            r#"
            UPDATE addresses
            SET
                address_line = COALESCE(?, address_line),
                landmark = COALESCE(?, landmark),
                city = COALESCE(?, city),
                state = COALESCE(?, state),
                pin = COALESCE(?, pin),
                country = COALESCE(?, country),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(request.address_line)
        .bind(request.landmark)
        .bind(request.city)
        .bind(request.state)
        .bind(request.pin)
        .bind(request.country)
        .bind(Utc::now())
        .bind(address_id)
        .execute(&self.db_pool)
        .await?;

        self.get_profile(user_id).await
    }

    /// Retrieves the canonical profile projection for a user
    pub async fn get_profile(&self, user_id: Uuid) -> AccountServiceResult<Profile> {
        let user = self
            .find_by_id(user_id)
            .await?
            .ok_or(AccountServiceError::UserNotFound)?;

        let addresses = self.find_addresses_of_user(user_id).await?;

        Ok(Profile::from((user, addresses)))
    }

    /// Overwrites the role of the user resolved by email.
    ///
    /// Authorization is the caller's responsibility; no identity check is
    /// performed here.
    pub async fn update_role(&self, request: UpdateRoleRequest) -> AccountServiceResult<()> {
        request
            .validate()
            .map_err(|e| AccountServiceError::Validation(format!("Invalid role data: {}", e)))?;

        let user = self
            .find_by_email(&request.email)
            .await?
            .ok_or(AccountServiceError::UserNotFound)?;

        sqlx::query("UPDATE users SET role = ?, updated_at = ? WHERE id = ?")
            .bind(request.role)
            .bind(Utc::now())
            .bind(user.id)
            .execute(&self.db_pool)
            .await?;

        info!(email = %user.email, role = %request.role, "role updated");
        Ok(())
    }

    /// Raw lookup by id. Absence is a valid result, never an error.
    pub async fn find_by_id(&self, user_id: Uuid) -> AccountServiceResult<Option<User>> {
        let user = sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(user_id)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    /// Raw lookup by email (normalized). Absence is a valid result, never an error.
    pub async fn find_by_email(&self, email: &str) -> AccountServiceResult<Option<User>> {
        let normalized_email = normalize_email(email);

        let user = sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
            .bind(normalized_email)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    /// Lookup by mobile number, used as the uniqueness pre-check
    async fn find_by_mobile(&self, mobile: &str) -> AccountServiceResult<Option<User>> {
        let user = sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE mobile = ?"))
            .bind(mobile)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    /// All addresses owned by a user
    async fn find_addresses_of_user(&self, user_id: Uuid) -> AccountServiceResult<Vec<Address>> {
        let addresses = sqlx::query_as(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE user_id = ?"
        ))
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(addresses)
    }
}
