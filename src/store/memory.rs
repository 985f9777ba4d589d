use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{collection, ContactStore, StoreError};
use crate::types::contact::{Contact, ContactFields};

/// Keeps contacts in process memory.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    contacts: RwLock<Vec<Contact>>,
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let contacts = self.contacts.read().await;

        Ok(contacts.iter().find(|contact| contact.id == id).cloned())
    }

    async fn create(&self, fields: ContactFields) -> Result<Contact, StoreError> {
        let mut contacts = self.contacts.write().await;

        Ok(collection::create(&mut contacts, fields))
    }

    async fn replace(
        &self,
        id: &str,
        fields: ContactFields,
    ) -> Result<Option<Contact>, StoreError> {
        let mut contacts = self.contacts.write().await;

        Ok(collection::replace(&mut contacts, id, fields))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut contacts = self.contacts.write().await;

        Ok(collection::delete(&mut contacts, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first_name: &str, email: &str) -> ContactFields {
        ContactFields {
            first_name: first_name.to_string(),
            last_name: None,
            email: email.to_string(),
            favorite_color: None,
            birthday: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let store = MemoryContactStore::default();

        let a = store.create(fields("Juan", "juan@gmail.com")).await.unwrap();
        let b = store.create(fields("Juan", "juan@gmail.com")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.list().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn replace_overwrites_every_field() {
        let store = MemoryContactStore::default();

        let mut original = fields("Juan", "juan@gmail.com");
        original.favorite_color = Some("blue".to_string());
        let created = store.create(original).await.unwrap();

        let replaced = store
            .replace(&created.id, fields("Ana", "ana@gmail.com"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.first_name, "Ana");
        assert_eq!(replaced.favorite_color, None);
        assert_eq!(store.get(&created.id).await.unwrap(), Some(replaced));
    }

    #[tokio::test]
    async fn unknown_ids_are_reported() {
        let store = MemoryContactStore::default();

        assert_eq!(store.get("missing").await.unwrap(), None);
        assert_eq!(
            store
                .replace("missing", fields("Juan", "juan@gmail.com"))
                .await
                .unwrap(),
            None
        );
        assert!(!store.delete("missing").await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = MemoryContactStore::default();

        let a = store.create(fields("Juan", "juan@gmail.com")).await.unwrap();
        let b = store.create(fields("Ana", "ana@gmail.com")).await.unwrap();

        assert!(store.delete(&a.id).await.unwrap());
        assert_eq!(store.list().await.unwrap(), vec![b]);
    }
}
