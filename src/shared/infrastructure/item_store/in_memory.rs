use crate::modules::inventory::adapters::outbound::item_store::{ItemStore, ItemStoreError};
use crate::modules::inventory::core::item::{Item, ItemPatch};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryItemStore {
    items: RwLock<HashMap<i64, Item>>,
    offline: bool,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), ItemStoreError> {
        if self.offline {
            return Err(ItemStoreError::Backend("Item store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn get(&self, item_id: i64) -> Result<Option<Item>, ItemStoreError> {
        self.ensure_online()?;
        Ok(self.items.read().await.get(&item_id).cloned())
    }

    async fn insert_new(&self, item_id: i64, item: Item) -> Result<bool, ItemStoreError> {
        self.ensure_online()?;
        let mut items = self.items.write().await;
        if items.contains_key(&item_id) {
            return Ok(false);
        }
        items.insert(item_id, item);
        Ok(true)
    }

    async fn update(
        &self,
        item_id: i64,
        patch: &ItemPatch,
    ) -> Result<Option<Item>, ItemStoreError> {
        self.ensure_online()?;
        let mut items = self.items.write().await;
        Ok(items.get_mut(&item_id).map(|item| {
            item.apply(patch);
            item.clone()
        }))
    }

    async fn remove(&self, item_id: i64) -> Result<Option<Item>, ItemStoreError> {
        self.ensure_online()?;
        Ok(self.items.write().await.remove(&item_id))
    }
}
