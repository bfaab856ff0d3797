//! Realm-scoped SQL storage for playground entries.
//!
//! Every query here takes the realm id resolved from the caller's session,
//! so a lookup can never cross the tenant boundary. Atomicity of a single
//! insert or delete is delegated to Postgres; this module holds no state.

use axum::{http::StatusCode, response::IntoResponse, Json};
use sqlx::{PgPool, Row};
use std::collections::BTreeMap;
use tracing::error;
use uuid::Uuid;

use super::types::{ErrorResponse, PlaygroundResponse};

#[derive(Debug)]
pub(super) struct PlaygroundRow {
    id: Uuid,
    realm_id: Uuid,
}

impl PlaygroundRow {
    /// Returns the resolved entry id for the removal that follows.
    /// Callers only ever hold a row after the realm-scoped lookup passed.
    pub(super) fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug)]
pub(super) enum PlaygroundError {
    Validation {
        msg: String,
        errors: BTreeMap<String, Vec<String>>,
    },
    NotFound,
    Database(sqlx::Error),
}

impl IntoResponse for PlaygroundError {
    /// Maps failures into stable HTTP responses for handlers.
    /// Database errors are logged server-side and surfaced as `500` without
    /// leaking details; `NotFound` deliberately keeps a single message for
    /// missing and wrong-realm ids.
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Validation { msg, errors } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    msg,
                    errors: Some(errors),
                }),
            )
                .into_response(),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    msg: "Invalid playground".to_string(),
                    errors: None,
                }),
            )
                .into_response(),
            Self::Database(err) => {
                error!("Database error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Inserts a new playground entry and returns its store-assigned id.
/// Caller must have validated the fields; no uniqueness is enforced across
/// name/tag/url, so duplicates insert new rows.
pub(super) async fn insert_playground(
    pool: &PgPool,
    realm_id: Uuid,
    name: &str,
    pygments_language: &str,
    url_prefix: &str,
) -> Result<Uuid, PlaygroundError> {
    let row = sqlx::query(
        r"
        INSERT INTO realm_playgrounds (realm_id, name, pygments_language, url_prefix)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        ",
    )
    .bind(realm_id)
    .bind(name)
    .bind(pygments_language)
    .bind(url_prefix)
    .fetch_one(pool)
    .await
    .map_err(PlaygroundError::Database)?;

    Ok(row.get("id"))
}

/// Resolves an entry whose id and realm both match.
/// Missing ids and ids owned by another realm both come back as `NotFound`,
/// so callers cannot probe for entries across realms.
pub(super) async fn access_playground_by_id(
    pool: &PgPool,
    realm_id: Uuid,
    playground_id: Uuid,
) -> Result<PlaygroundRow, PlaygroundError> {
    let row = sqlx::query(
        r"
        SELECT id, realm_id
        FROM realm_playgrounds
        WHERE id = $1 AND realm_id = $2
        LIMIT 1
        ",
    )
    .bind(playground_id)
    .bind(realm_id)
    .fetch_optional(pool)
    .await
    .map_err(PlaygroundError::Database)?;

    match row {
        Some(row) => Ok(PlaygroundRow {
            id: row.get("id"),
            realm_id: row.get("realm_id"),
        }),
        None => Err(PlaygroundError::NotFound),
    }
}

/// Permanently removes a resolved entry. There is no soft-delete state.
/// The row may vanish between resolution and removal when two deletes
/// race; only the request that actually deleted it succeeds.
pub(super) async fn remove_playground(
    pool: &PgPool,
    playground: &PlaygroundRow,
) -> Result<(), PlaygroundError> {
    let result = sqlx::query("DELETE FROM realm_playgrounds WHERE id = $1 AND realm_id = $2")
        .bind(playground.id)
        .bind(playground.realm_id)
        .execute(pool)
        .await
        .map_err(PlaygroundError::Database)?;

    if result.rows_affected() == 0 {
        return Err(PlaygroundError::NotFound);
    }

    Ok(())
}

/// Lists a realm's playground entries as DTOs, newest first.
pub(super) async fn fetch_playgrounds(
    pool: &PgPool,
    realm_id: Uuid,
) -> Result<Vec<PlaygroundResponse>, sqlx::Error> {
    let query = r#"
        SELECT
            id::text AS id,
            name,
            pygments_language,
            url_prefix,
            to_char(created_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
        FROM realm_playgrounds
        WHERE realm_id = $1
        ORDER BY created_at DESC, id
    "#;
    let rows = sqlx::query(query).bind(realm_id).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|row| PlaygroundResponse {
            id: row.get("id"),
            name: row.get("name"),
            pygments_language: row.get("pygments_language"),
            url_prefix: row.get("url_prefix"),
            created_at: row.get("created_at"),
        })
        .collect())
}
