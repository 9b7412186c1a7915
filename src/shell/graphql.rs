use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

use crate::modules::inventory::use_cases::create_item::inbound::graphql::CreateItemMutation;
use crate::modules::inventory::use_cases::delete_item::inbound::graphql::DeleteItemMutation;
use crate::modules::inventory::use_cases::get_item::inbound::graphql::GetItemQuery;
use crate::modules::inventory::use_cases::update_item::inbound::graphql::UpdateItemMutation;
use crate::shell::state::AppState;

pub type QueryRoot = GetItemQuery;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateItemMutation, UpdateItemMutation, DeleteItemMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
