use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::inventory::adapters::inbound::http::error_response;
use crate::modules::inventory::core::item::Item;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Item>, JsonRejection>,
) -> impl IntoResponse {
    let (Ok(Path(item_id)), Ok(Json(item))) = (item_id, body) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state.create_handler.handle(item_id, item).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => error_response(e),
    }
}
