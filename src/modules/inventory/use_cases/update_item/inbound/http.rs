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
use crate::modules::inventory::core::item::ItemPatch;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ItemPatch>, JsonRejection>,
) -> impl IntoResponse {
    let (Ok(Path(item_id)), Ok(Json(patch))) = (item_id, body) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state.update_handler.handle(item_id, patch).await {
        Ok(item) => Json(item).into_response(),
        Err(e) => error_response(e),
    }
}
