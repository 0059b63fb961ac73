use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, PartialEq)]
pub enum APIErrors {
    Unauthorized,
    Forbidden,
    BadRequest,
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        match self {
            APIErrors::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Missing or invalid token").into_response()
            }
            APIErrors::Forbidden => (StatusCode::FORBIDDEN, "Permission denied").into_response(),
            APIErrors::BadRequest => (StatusCode::BAD_REQUEST, "Invalid request").into_response(),
        }
    }
}
