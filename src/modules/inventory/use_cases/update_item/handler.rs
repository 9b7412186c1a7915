use crate::modules::inventory::adapters::outbound::item_store::ItemStore;
use crate::modules::inventory::core::errors::{ApplicationError, DomainError};
use crate::modules::inventory::core::item::{Item, ItemPatch};
use std::sync::Arc;

pub struct UpdateItemHandler<TStore>
where
    TStore: ItemStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateItemHandler<TStore>
where
    TStore: ItemStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, item_id: i64, patch: ItemPatch) -> Result<Item, ApplicationError> {
        match self.store.update(item_id, &patch).await? {
            Some(item) => {
                tracing::debug!(item_id, "item updated");
                Ok(item)
            }
            None => {
                tracing::warn!(item_id, "rejected update for unknown item id");
                Err(DomainError::ItemIdDoesNotExist.into())
            }
        }
    }
}
