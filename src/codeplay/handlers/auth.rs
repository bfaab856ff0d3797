//! Session resolution and realm-scoped authorization gates.
//!
//! Flow Overview: read the session token (cookie or bearer header), resolve
//! it to a user and their realm, and hand handlers an explicit
//! `RealmPrincipal`. The realm scope always comes from the session itself;
//! it is never taken from the request. Write routes go through
//! `require_realm_admin`, read routes through `require_realm_member`.

use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use tracing::error;
use uuid::Uuid;

const SESSION_COOKIE_NAME: &str = "codeplay_session";

const REALM_ROLE_OWNER: &str = "owner";
const REALM_ROLE_ADMIN: &str = "admin";

/// Authenticated caller context derived from the session token.
#[derive(Clone, Debug)]
pub struct RealmPrincipal {
    pub user_id: Uuid,
    pub realm_id: Uuid,
    role: String,
}

impl RealmPrincipal {
    /// Returns `true` when the caller holds an elevated realm role (owner/admin).
    fn is_realm_admin(&self) -> bool {
        self.role == REALM_ROLE_OWNER || self.role == REALM_ROLE_ADMIN
    }
}

/// Resolve the session into a principal, or return 401 for missing/expired sessions.
pub async fn require_realm_member(
    headers: &HeaderMap,
    pool: &PgPool,
) -> Result<RealmPrincipal, StatusCode> {
    let Some(token) = extract_session_token(headers) else {
        return Err(StatusCode::UNAUTHORIZED);
    };
    // Only the hash is stored; never compare raw tokens against the database.
    let token_hash = hash_session_token(&token);
    let query = r"
        SELECT u.id AS user_id, u.realm_id, u.role
        FROM user_sessions s
        JOIN users u ON u.id = s.user_id
        WHERE s.session_hash = $1 AND s.expires_at > NOW()
        LIMIT 1
    ";
    match sqlx::query(query)
        .bind(&token_hash)
        .fetch_optional(pool)
        .await
    {
        Ok(Some(row)) => Ok(RealmPrincipal {
            user_id: row.get("user_id"),
            realm_id: row.get("realm_id"),
            role: row.get("role"),
        }),
        Ok(None) => Err(StatusCode::UNAUTHORIZED),
        Err(err) => {
            error!("Failed to lookup session: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Resolve the session and require an elevated realm role, or return 403.
pub async fn require_realm_admin(
    headers: &HeaderMap,
    pool: &PgPool,
) -> Result<RealmPrincipal, StatusCode> {
    let principal = require_realm_member(headers, pool).await?;
    if principal.is_realm_admin() {
        Ok(principal)
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}

/// Mint a session token the way a login flow would, so tests exercise the
/// same token shape and hashing that `require_realm_member` resolves.
/// Session issuance itself lives outside this service.
#[cfg(test)]
pub(crate) fn generate_session_token() -> anyhow::Result<String> {
    use anyhow::Context;
    use base64ct::{Base64UrlUnpadded, Encoding};
    use rand::{rngs::OsRng, RngCore};

    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("failed to generate session token")?;
    Ok(Base64UrlUnpadded::encode_string(&bytes))
}

/// Hash a session token so raw values never touch the database.
/// The hash is used for lookups when the token is presented.
pub fn hash_session_token(token: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}

fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_bearer_token(headers) {
        return Some(token);
    }
    let header = headers.get(axum::http::header::COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
