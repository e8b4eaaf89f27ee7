use crate::error::PageError;
use crate::page;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
};

/// GET / handler - Render the saved string as an HTML page
///
/// Reads the configured parameter from the store with decryption disabled.
/// Also mounted as the router fallback so every path renders the page.
#[utoipa::path(
    get,
    path = routes::PAGE,
    responses(
        (status = 200, description = "Page rendered", body = String, content_type = "text/html"),
        (status = 500, description = "Parameter lookup failed", body = String, content_type = "text/plain")
    ),
    tag = "page"
)]
pub async fn page_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, [(header::HeaderName, &'static str); 1], String), PageError> {
    let name = &state.config.param_name;

    let value = state.store.get_parameter(name, false).await?;
    tracing::info!("Rendered page for parameter: {}", name);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        page::render(&value),
    ))
}
