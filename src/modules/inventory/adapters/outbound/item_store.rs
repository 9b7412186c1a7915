// Port describing what the inventory use cases need from storage.
//
// Every method performs its check and its mutation as one step, so callers
// never observe an id between "checked" and "written".

use crate::modules::inventory::core::item::{Item, ItemPatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn get(&self, item_id: i64) -> Result<Option<Item>, ItemStoreError>;

    /// Returns `false` without writing when `item_id` is already taken.
    async fn insert_new(&self, item_id: i64, item: Item) -> Result<bool, ItemStoreError>;

    async fn update(
        &self,
        item_id: i64,
        patch: &ItemPatch,
    ) -> Result<Option<Item>, ItemStoreError>;

    async fn remove(&self, item_id: i64) -> Result<Option<Item>, ItemStoreError>;
}
