use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::inventory::adapters::inbound::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GetItemParams {
    pub name: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
    Query(params): Query<GetItemParams>,
) -> impl IntoResponse {
    let Ok(Path(item_id)) = item_id else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state
        .get_handler
        .handle(item_id, params.name.as_deref())
        .await
    {
        Ok(item) => Json(item).into_response(),
        Err(e) => error_response(e),
    }
}
