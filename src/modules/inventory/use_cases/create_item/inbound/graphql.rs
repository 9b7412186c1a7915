use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::inventory::adapters::inbound::graphql::{ItemView, to_graphql_error};
use crate::modules::inventory::core::item::Item;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateItemMutation;

#[Object]
impl CreateItemMutation {
    async fn create_item(
        &self,
        context: &Context<'_>,
        id: i64,
        name: String,
        price: f64,
        description: Option<String>,
    ) -> GqlResult<ItemView> {
        let state = context.data_unchecked::<AppState>();
        let item = Item {
            name,
            price,
            description,
        };
        state
            .create_handler
            .handle(id, item)
            .await
            .map(ItemView::from)
            .map_err(to_graphql_error)
    }
}
