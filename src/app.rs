use axum::{routing::{any, get}, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{health_handler, page_handler};
use crate::routes;
use crate::state::AppState;

/// Build the router shared by the Lambda runtime and the local listener
///
/// API Gateway may forward any path and method, so unmatched requests render the page too.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::PAGE, any(page_handler))
        .route(routes::HEALTH, get(health_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
