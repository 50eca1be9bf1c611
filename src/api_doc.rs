use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "kv-sync API",
        version = "1.0.0",
        description = "A minimal plain-text key-value synchronization endpoint"
    ),
    paths(
        handlers::health::root_handler,
        handlers::health::health_handler,
        handlers::get::get_handler,
        handlers::put::put_handler
    ),
    tags(
        (name = "health", description = "Liveness and readiness checks"),
        (name = "data", description = "Record read and write operations")
    )
)]
pub struct ApiDoc;
