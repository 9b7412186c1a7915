use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::inventory::adapters::inbound::graphql::to_graphql_error;
use crate::modules::inventory::use_cases::delete_item::handler::DELETED_MESSAGE;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteItemMutation;

#[Object]
impl DeleteItemMutation {
    async fn delete_item(&self, context: &Context<'_>, id: i64) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(id)
            .await
            .map(|()| DELETED_MESSAGE.to_string())
            .map_err(to_graphql_error)
    }
}
