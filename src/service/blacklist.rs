//! Token Blacklist
//!
//! Logout as a deny-list: a presented access/refresh token pair is marked
//! invalid in Redis for the remainder of its natural validity window, rather
//! than being revoked at the issuer. Entries are write-once and self-expire;
//! this crate never reads them back. Consumption belongs to the
//! authentication collaborator.

use redis::{aio::ConnectionManager, AsyncCommands};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

use crate::models::LogoutResponse;
use crate::utils::error::AppResult;

/// Blacklist expiry for access tokens. Must match or exceed the access
/// token's own validity window, or a token could outlive its entry and be
/// wrongly accepted again.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Blacklist expiry for refresh tokens. Same constraint as
/// [`ACCESS_TOKEN_TTL`], against the refresh token's 7-day window.
pub const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

const ACCESS_TOKEN_TYPE: &str = "accessToken";
const REFRESH_TOKEN_TYPE: &str = "refreshToken";

/// Redis-backed deny list for logged-out tokens
#[derive(Clone)]
pub struct TokenBlacklist {
    conn: ConnectionManager,
}

impl fmt::Debug for TokenBlacklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenBlacklist")
            .field("connection", &"ConnectionManager")
            .finish()
    }
}

impl TokenBlacklist {
    /// Connect to the blacklist cache at the given Redis URL
    pub async fn new(redis_url: &str) -> AppResult<Self> {
        info!("Connecting to token blacklist cache at {}", redis_url);

        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self { conn })
    }

    /// Build a blacklist over an already-established connection
    pub fn with_connection(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Marks both presented tokens as invalid for the remainder of their
    /// validity windows.
    ///
    /// The only failure mode is the cache being unavailable, which propagates
    /// unchanged to the caller.
    pub async fn logout(
        &mut self,
        access_token: &str,
        refresh_token: &str,
    ) -> AppResult<LogoutResponse> {
        self.deny(ACCESS_TOKEN_TYPE, access_token, ACCESS_TOKEN_TTL)
            .await?;
        self.deny(REFRESH_TOKEN_TYPE, refresh_token, REFRESH_TOKEN_TTL)
            .await?;

        Ok(LogoutResponse {
            message: "Logout successful".to_string(),
        })
    }

    async fn deny(&mut self, token_type: &str, token: &str, ttl: Duration) -> AppResult<()> {
        let key = blacklist_key(token_type, token);
        debug!("Blacklist SET: {} (TTL: {:?})", key, ttl);

        self.conn
            .set_ex::<_, _, ()>(key, true, ttl.as_secs())
            .await?;

        Ok(())
    }
}

/// Cache key for a blacklisted token: `blacklist:<tokenType>:<tokenValue>`
fn blacklist_key(token_type: &str, token: &str) -> String {
    format!("blacklist:{}:{}", token_type, token)
}
