use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::inventory::use_cases::create_item::inbound::http as create_http;
use crate::modules::inventory::use_cases::delete_item::inbound::http as delete_http;
use crate::modules::inventory::use_cases::get_item::inbound::http as get_http;
use crate::modules::inventory::use_cases::update_item::inbound::http as update_http;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get-item/{item_id}", get(get_http::handle))
        .route("/create-item/{item_id}", post(create_http::handle))
        .route("/update-item/{item_id}", put(update_http::handle))
        .route("/delete-item/{item_id}", delete(delete_http::handle))
        .with_state(state)
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let schema = crate::shell::graphql::schema(state.clone());
    let app = router(state)
        .merge(crate::shell::graphql::router(schema))
        .layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
