//! OpenAPI document for the HTTP surface.

use utoipa::OpenApi;

use crate::api::handlers;
use crate::error::ErrorResponse;
use crate::store::Item;

/// OpenAPI 3 document covering the JSON endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "item-service",
        description = "Minimal in-memory item API with health and metrics endpoints"
    ),
    paths(
        handlers::welcome,
        handlers::health,
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
        handlers::info,
    ),
    components(schemas(
        Item,
        ErrorResponse,
        handlers::CreateItemRequest,
        handlers::WelcomeResponse,
        handlers::HealthResponse,
        handlers::InfoResponse,
    )),
    tags(
        (name = "items", description = "Item collection"),
        (name = "ops", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;
