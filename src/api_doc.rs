use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "dynamic-string-page API",
        version = "1.0.0",
        description = "Renders a string stored in AWS SSM Parameter Store as an HTML page"
    ),
    paths(
        handlers::health::health_handler,
        handlers::page::page_handler
    ),
    components(
        schemas(HealthResponse)
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "page", description = "Dynamic string page")
    )
)]
pub struct ApiDoc;
