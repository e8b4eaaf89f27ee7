use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body returned for every failed page render
pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";

/// Error type for the page endpoint
///
/// All lookup failures collapse into one variant. The cause is logged when the
/// error is turned into a response and never reaches the caller.
#[derive(Debug)]
pub enum PageError {
    /// The parameter store lookup failed for any reason
    ParameterLookup(anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::ParameterLookup(err) => {
                tracing::error!("Error retrieving parameter: {:#}", err);
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_BODY).into_response()
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        PageError::ParameterLookup(err)
    }
}
