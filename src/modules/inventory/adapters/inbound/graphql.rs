use async_graphql::SimpleObject;

use crate::modules::inventory::core::errors::ApplicationError;
use crate::modules::inventory::core::item::Item;

#[derive(SimpleObject)]
#[graphql(name = "Item")]
pub struct ItemView {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            price: item.price,
            description: item.description,
        }
    }
}

pub fn to_graphql_error(error: ApplicationError) -> async_graphql::Error {
    if let ApplicationError::Store(e) = &error {
        tracing::error!(error = %e, "item store failure");
    }
    async_graphql::Error::new(error.to_string())
}
