//! Create, delete, and list handlers for realm playgrounds.

use axum::{
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sqlx::PgPool;
use std::collections::BTreeMap;
use tracing::{debug, error};
use uuid::Uuid;

use super::super::auth::{require_realm_admin, require_realm_member};
use super::{
    storage::{
        access_playground_by_id, fetch_playgrounds, insert_playground, remove_playground,
        PlaygroundError,
    },
    types::{CreatePlaygroundRequest, CreatePlaygroundResponse, ErrorResponse, PlaygroundResponse},
    validator::{check_name, check_pygments_language, check_url_prefix},
};

#[utoipa::path(
    post,
    path = "/v1/realm/playgrounds",
    request_body = CreatePlaygroundRequest,
    responses(
        (status = 201, description = "Playground entry created.", body = CreatePlaygroundResponse),
        (status = 400, description = "One or more fields failed validation.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session."),
        (status = 403, description = "Caller is not a realm administrator."),
    ),
    tag = "playgrounds"
)]
/// Registers a playground entry for the admin caller's realm and returns the new id.
/// Fields are trimmed here before validation and storage; validators never trim.
/// Duplicate name/tag/url combinations are allowed and create distinct entries.
pub async fn create_playground(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    Json(payload): Json<CreatePlaygroundRequest>,
) -> impl IntoResponse {
    let admin = match require_realm_admin(&headers, &pool).await {
        Ok(principal) => principal,
        Err(status) => return status.into_response(),
    };

    let name = payload.name.trim();
    let url_prefix = payload.url_prefix.trim();
    let pygments_language = payload.pygments_language.trim();

    if let Err(err) = validate_fields(name, url_prefix, pygments_language) {
        return err.into_response();
    }

    match insert_playground(&pool, admin.realm_id, name, pygments_language, url_prefix).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(CreatePlaygroundResponse { id: id.to_string() }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/v1/realm/playgrounds/{playground_id}",
    params(("playground_id" = String, Path, description = "Playground entry id")),
    responses(
        (status = 204, description = "Playground entry removed."),
        (status = 401, description = "Missing or invalid session."),
        (status = 403, description = "Caller is not a realm administrator."),
        (status = 404, description = "No such playground within the caller's realm.", body = ErrorResponse),
    ),
    tag = "playgrounds"
)]
/// Permanently removes a playground entry from the admin caller's realm.
/// An id owned by another realm reports the same "Invalid playground" error
/// as an id that never existed.
pub async fn delete_playground(
    Path(playground_id): Path<Uuid>,
    headers: HeaderMap,
    pool: Extension<PgPool>,
) -> impl IntoResponse {
    let admin = match require_realm_admin(&headers, &pool).await {
        Ok(principal) => principal,
        Err(status) => return status.into_response(),
    };

    let playground = match access_playground_by_id(&pool, admin.realm_id, playground_id).await {
        Ok(playground) => playground,
        Err(err) => return err.into_response(),
    };

    debug!("Removing playground {}", playground.id());

    match remove_playground(&pool, &playground).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/v1/realm/playgrounds",
    responses(
        (status = 200, description = "List the caller's realm playgrounds.", body = [PlaygroundResponse]),
        (status = 401, description = "Missing or invalid session."),
    ),
    tag = "playgrounds"
)]
/// Lists the playground entries of the caller's realm, newest first.
/// Any realm member may list; only admins may create or delete.
pub async fn list_playgrounds(headers: HeaderMap, pool: Extension<PgPool>) -> impl IntoResponse {
    let member = match require_realm_member(&headers, &pool).await {
        Ok(principal) => principal,
        Err(status) => return status.into_response(),
    };

    match fetch_playgrounds(&pool, member.realm_id).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(err) => {
            error!("Failed to list playgrounds: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Runs every field validator so the error payload reports all offending
/// fields at once, while `msg` carries the first failure in field order.
fn validate_fields(
    name: &str,
    url_prefix: &str,
    pygments_language: &str,
) -> Result<(), PlaygroundError> {
    let checks = [
        ("name", check_name(name)),
        ("url_prefix", check_url_prefix(url_prefix)),
        ("pygments_language", check_pygments_language(pygments_language)),
    ];

    let mut first = None;
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (field, result) in checks {
        if let Err(message) = result {
            if first.is_none() {
                first = Some(message.clone());
            }
            errors.entry(field.to_string()).or_default().push(message);
        }
    }

    match first {
        Some(msg) => Err(PlaygroundError::Validation { msg, errors }),
        None => Ok(()),
    }
}
