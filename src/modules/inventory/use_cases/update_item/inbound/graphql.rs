use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::inventory::adapters::inbound::graphql::{ItemView, to_graphql_error};
use crate::modules::inventory::core::item::ItemPatch;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateItemMutation;

#[Object]
impl UpdateItemMutation {
    async fn update_item(
        &self,
        context: &Context<'_>,
        id: i64,
        name: Option<String>,
        price: Option<f64>,
        description: Option<String>,
    ) -> GqlResult<ItemView> {
        let state = context.data_unchecked::<AppState>();
        let patch = ItemPatch {
            name,
            price,
            description,
        };
        state
            .update_handler
            .handle(id, patch)
            .await
            .map(ItemView::from)
            .map_err(to_graphql_error)
    }
}
