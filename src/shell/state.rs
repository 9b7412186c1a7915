use crate::modules::inventory::use_cases::create_item::handler::CreateItemHandler;
use crate::modules::inventory::use_cases::delete_item::handler::DeleteItemHandler;
use crate::modules::inventory::use_cases::get_item::handler::GetItemHandler;
use crate::modules::inventory::use_cases::update_item::handler::UpdateItemHandler;
use crate::shared::infrastructure::item_store::in_memory::InMemoryItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_handler: Arc<GetItemHandler<InMemoryItemStore>>,
    pub create_handler: Arc<CreateItemHandler<InMemoryItemStore>>,
    pub update_handler: Arc<UpdateItemHandler<InMemoryItemStore>>,
    pub delete_handler: Arc<DeleteItemHandler<InMemoryItemStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryItemStore>) -> Self {
        Self {
            get_handler: Arc::new(GetItemHandler::new(store.clone())),
            create_handler: Arc::new(CreateItemHandler::new(store.clone())),
            update_handler: Arc::new(UpdateItemHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteItemHandler::new(store)),
        }
    }
}
