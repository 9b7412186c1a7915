use crate::modules::inventory::adapters::outbound::item_store::ItemStore;
use crate::modules::inventory::core::errors::{ApplicationError, DomainError};
use std::sync::Arc;

pub const DELETED_MESSAGE: &str = "Item deleted!";

pub struct DeleteItemHandler<TStore>
where
    TStore: ItemStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteItemHandler<TStore>
where
    TStore: ItemStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, item_id: i64) -> Result<(), ApplicationError> {
        if self.store.remove(item_id).await?.is_none() {
            tracing::warn!(item_id, "rejected delete for unknown item id");
            return Err(DomainError::ItemIdDoesNotExist.into());
        }
        tracing::debug!(item_id, "item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod delete_item_handler_tests {
    use super::*;
    use crate::modules::inventory::adapters::outbound::item_store::ItemStoreError;
    use crate::shared::infrastructure::item_store::in_memory::InMemoryItemStore;
    use crate::tests::fixtures::items::ItemBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_the_item() {
        let store = Arc::new(InMemoryItemStore::new());
        store.insert_new(1, ItemBuilder::new().build()).await.unwrap();
        let handler = DeleteItemHandler::new(store.clone());
        handler.handle(1).await.expect("delete failed");
        assert_eq!(store.get(1).await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_on_a_second_delete() {
        let store = Arc::new(InMemoryItemStore::new());
        store.insert_new(1, ItemBuilder::new().build()).await.unwrap();
        let handler = DeleteItemHandler::new(store);
        handler.handle(1).await.expect("first delete failed");
        let result = handler.handle(1).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::ItemIdDoesNotExist))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline() {
        let mut store = InMemoryItemStore::new();
        store.toggle_offline();
        let handler = DeleteItemHandler::new(Arc::new(store));
        assert!(matches!(
            handler.handle(1).await,
            Err(ApplicationError::Store(ItemStoreError::Backend(_)))
        ));
    }
}
