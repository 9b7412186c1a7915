use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::inventory::core::errors::{ApplicationError, ErrorKind};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Domain(domain) => {
            let status = match domain.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            };
            (
                status,
                Json(ErrorDetail {
                    detail: domain.to_string(),
                }),
            )
                .into_response()
        }
        ApplicationError::Store(e) => {
            tracing::error!(error = %e, "item store failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
