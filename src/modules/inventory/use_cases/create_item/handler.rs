use crate::modules::inventory::adapters::outbound::item_store::ItemStore;
use crate::modules::inventory::core::errors::{ApplicationError, DomainError};
use crate::modules::inventory::core::item::Item;
use std::sync::Arc;

pub struct CreateItemHandler<TStore>
where
    TStore: ItemStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateItemHandler<TStore>
where
    TStore: ItemStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, item_id: i64, item: Item) -> Result<Item, ApplicationError> {
        if !self.store.insert_new(item_id, item.clone()).await? {
            tracing::warn!(item_id, "rejected create for existing item id");
            return Err(DomainError::ItemIdAlreadyExists.into());
        }
        tracing::debug!(item_id, name = %item.name, "item created");
        Ok(item)
    }
}
