//! OpenAPI document for the `/v1` surface and `/health`.
//!
//! Add new endpoints to the `paths` list so they show up in the generated
//! spec served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use super::handlers::{health, playgrounds};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "codeplay",
        description = "Per-realm registry of code playground integrations"
    ),
    paths(
        health::health,
        playgrounds::entries::create_playground,
        playgrounds::entries::delete_playground,
        playgrounds::entries::list_playgrounds,
    ),
    components(schemas(
        health::Health,
        playgrounds::types::CreatePlaygroundRequest,
        playgrounds::types::CreatePlaygroundResponse,
        playgrounds::types::PlaygroundResponse,
        playgrounds::types::ErrorResponse,
    )),
    tags(
        (name = "playgrounds", description = "Realm playground registry"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
