use crate::modules::inventory::adapters::outbound::item_store::ItemStore;
use crate::modules::inventory::core::errors::{ApplicationError, DomainError};
use crate::modules::inventory::core::item::Item;
use std::sync::Arc;

pub struct GetItemHandler<TStore>
where
    TStore: ItemStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetItemHandler<TStore>
where
    TStore: ItemStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Looks up `item_id`; when `name` is given the stored name must match it exactly.
    pub async fn handle(&self, item_id: i64, name: Option<&str>) -> Result<Item, ApplicationError> {
        let item = self
            .store
            .get(item_id)
            .await?
            .ok_or(DomainError::ItemIdNotFound)?;

        if !item.matches_name(name) {
            return Err(DomainError::ItemNameNotFound.into());
        }
        Ok(item)
    }
}
