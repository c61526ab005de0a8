use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::ErrorBody;
use thiserror::Error;

/// The two failure kinds the proxies can surface. Both map to a generic 500
/// with the underlying message passed through verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Service(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(ErrorBody {
            message: self.to_string(),
        })
    }
}
