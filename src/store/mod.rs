use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde::Deserialize;

use crate::types::contact::{Contact, ContactFields};

pub mod file;
pub mod memory;

pub use file::FileContactStore;
pub use memory::MemoryContactStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read the contact collection from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse the contact collection at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize the contact collection: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to write the contact collection to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A collection of contact documents keyed by an opaque id.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static {
    /// Returns all contacts in insertion order.
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError>;

    /// Stores a new contact under a freshly generated id.
    async fn create(&self, fields: ContactFields) -> Result<Contact, StoreError>;

    /// Replaces every field of the contact. Returns `None` if the id is unknown.
    async fn replace(&self, id: &str, fields: ContactFields)
        -> Result<Option<Contact>, StoreError>;

    /// Returns `false` if the id is unknown.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// Selects the store implementation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Contacts live only as long as the process.
    #[default]
    Memory,
    /// Contacts are persisted as a JSON document collection in a single file.
    File { path: PathBuf },
}

impl StoreConfig {
    /// Opens the configured store once. The returned handle is shared by all requests.
    #[tracing::instrument(skip_all)]
    pub async fn connect(&self) -> Result<Arc<dyn ContactStore>, StoreError> {
        match self {
            StoreConfig::Memory => {
                tracing::info!("Using in-memory contact store");

                Ok(Arc::new(MemoryContactStore::default()))
            }
            StoreConfig::File { path } => {
                tracing::info!(path = %path.display(), "Opening file contact store");

                Ok(Arc::new(FileContactStore::open(path.clone()).await?))
            }
        }
    }
}

fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Mutations shared by the store implementations, applied to an in-memory collection.
mod collection {
    use super::generate_id;
    use crate::types::contact::{Contact, ContactFields};

    pub fn create(contacts: &mut Vec<Contact>, fields: ContactFields) -> Contact {
        let contact = fields.into_contact(generate_id());
        contacts.push(contact.clone());

        contact
    }

    pub fn replace(contacts: &mut [Contact], id: &str, fields: ContactFields) -> Option<Contact> {
        let slot = contacts.iter_mut().find(|contact| contact.id == id)?;
        *slot = fields.into_contact(slot.id.clone());

        Some(slot.clone())
    }

    pub fn delete(contacts: &mut Vec<Contact>, id: &str) -> bool {
        let before = contacts.len();
        contacts.retain(|contact| contact.id != id);

        contacts.len() != before
    }
}
