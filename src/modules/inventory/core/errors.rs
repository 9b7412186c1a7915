use crate::modules::inventory::adapters::outbound::item_store::ItemStoreError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Item ID not found.")]
    ItemIdNotFound,

    #[error("Item name not found.")]
    ItemNameNotFound,

    #[error("Item ID does not exist.")]
    ItemIdDoesNotExist,

    #[error("Item ID already exists")]
    ItemIdAlreadyExists,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ItemIdNotFound
            | DomainError::ItemNameNotFound
            | DomainError::ItemIdDoesNotExist => ErrorKind::NotFound,
            DomainError::ItemIdAlreadyExists => ErrorKind::Conflict,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] ItemStoreError),
}
