use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::inventory::adapters::inbound::http::error_response;
use crate::modules::inventory::use_cases::delete_item::handler::DELETED_MESSAGE;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteItemResponse {
    #[serde(rename = "Success")]
    pub success: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Ok(Path(item_id)) = item_id else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state.delete_handler.handle(item_id).await {
        Ok(()) => Json(DeleteItemResponse {
            success: DELETED_MESSAGE,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}
