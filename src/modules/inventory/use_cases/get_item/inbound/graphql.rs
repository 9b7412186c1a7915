use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::inventory::adapters::inbound::graphql::{ItemView, to_graphql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetItemQuery;

#[Object]
impl GetItemQuery {
    async fn item(
        &self,
        context: &Context<'_>,
        id: i64,
        name: Option<String>,
    ) -> GqlResult<ItemView> {
        let state = context.data_unchecked::<AppState>();
        state
            .get_handler
            .handle(id, name.as_deref())
            .await
            .map(ItemView::from)
            .map_err(to_graphql_error)
    }
}
