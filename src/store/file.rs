use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{collection, ContactStore, StoreError};
use crate::types::contact::{Contact, ContactFields};

/// Persists contacts as a JSON array in a single file.
///
/// The collection is loaded once on [`FileContactStore::open`] and served from memory.
/// Every mutation is applied to a copy, written to a temporary file and renamed over the
/// collection file before it becomes visible, so a failed write leaves the store unchanged.
#[derive(Debug)]
pub struct FileContactStore {
    path: PathBuf,
    contacts: RwLock<Vec<Contact>>,
}

impl FileContactStore {
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        let contacts = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Collection file not found, creating");

                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|source| StoreError::Write {
                            path: parent.to_path_buf(),
                            source,
                        })?;
                }

                let contacts = Vec::new();
                Self::persist(&path, &contacts).await?;

                contacts
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        tracing::debug!(path = %path.display(), count = contacts.len(), "Loaded contacts");

        Ok(Self {
            path,
            contacts: RwLock::new(contacts),
        })
    }

    #[tracing::instrument(skip_all)]
    async fn persist(path: &Path, contacts: &[Contact]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(contacts).map_err(StoreError::Serialize)?;

        let mut temp = path.as_os_str().to_owned();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        tokio::fs::write(&temp, bytes)
            .await
            .map_err(|source| StoreError::Write {
                path: temp.clone(),
                source,
            })?;

        tokio::fs::rename(&temp, path)
            .await
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Runs `mutate` on a copy of the collection and commits it only if the copy was persisted.
    ///
    /// `mutate` also reports whether it changed anything; an unchanged copy is neither
    /// written nor committed.
    async fn mutate<R>(
        &self,
        mutate: impl FnOnce(&mut Vec<Contact>) -> (R, bool),
    ) -> Result<R, StoreError> {
        let mut contacts = self.contacts.write().await;

        let mut next = contacts.clone();
        let (result, changed) = mutate(&mut next);

        if changed {
            Self::persist(&self.path, &next).await?;
            *contacts = next;
        }

        Ok(result)
    }
}

#[async_trait]
impl ContactStore for FileContactStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let contacts = self.contacts.read().await;

        Ok(contacts.iter().find(|contact| contact.id == id).cloned())
    }

    async fn create(&self, fields: ContactFields) -> Result<Contact, StoreError> {
        self.mutate(|contacts| (collection::create(contacts, fields), true))
            .await
    }

    async fn replace(
        &self,
        id: &str,
        fields: ContactFields,
    ) -> Result<Option<Contact>, StoreError> {
        self.mutate(|contacts| {
            let replaced = collection::replace(contacts, id, fields);
            let changed = replaced.is_some();

            (replaced, changed)
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.mutate(|contacts| {
            let deleted = collection::delete(contacts, id);

            (deleted, deleted)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn juan() -> ContactFields {
        ContactFields {
            first_name: "Juan".to_string(),
            last_name: Some("Perez".to_string()),
            email: "juan@gmail.com".to_string(),
            favorite_color: Some("blue".to_string()),
            birthday: Some("01-02-2024".to_string()),
        }
    }

    #[tokio::test]
    async fn contacts_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let store = FileContactStore::open(path.clone()).await.unwrap();
        let kept = store.create(juan()).await.unwrap();
        let dropped = store.create(juan()).await.unwrap();
        assert!(store.delete(&dropped.id).await.unwrap());
        drop(store);

        let reopened = FileContactStore::open(path).await.unwrap();

        assert_eq!(reopened.list().await.unwrap(), vec![kept.clone()]);
        assert_eq!(reopened.get(&kept.id).await.unwrap(), Some(kept));
    }

    #[tokio::test]
    async fn replace_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let store = FileContactStore::open(path.clone()).await.unwrap();
        let created = store.create(juan()).await.unwrap();

        let mut fields = juan();
        fields.first_name = "Ana".to_string();
        fields.last_name = None;
        store.replace(&created.id, fields).await.unwrap().unwrap();
        drop(store);

        let reopened = FileContactStore::open(path).await.unwrap();
        let contact = reopened.get(&created.id).await.unwrap().unwrap();

        assert_eq!(contact.first_name, "Ana");
        assert_eq!(contact.last_name, None);
    }

    #[tokio::test]
    async fn corrupt_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let err = FileContactStore::open(path).await.unwrap_err();

        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[tokio::test]
    async fn replace_of_unknown_id_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let store = FileContactStore::open(path.clone()).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(store.replace("missing", juan()).await.unwrap(), None);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        let store = FileContactStore::open(path.clone()).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(!store.delete("missing").await.unwrap());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn unknown_ids_succeed_when_the_file_is_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let path = sub.join("contacts.json");

        let store = FileContactStore::open(path).await.unwrap();
        tokio::fs::remove_dir_all(&sub).await.unwrap();

        assert!(!store.delete("missing").await.unwrap());
        assert_eq!(store.replace("missing", juan()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_write_leaves_collection_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let path = sub.join("contacts.json");

        let store = FileContactStore::open(path).await.unwrap();
        let kept = store.create(juan()).await.unwrap();
        tokio::fs::remove_dir_all(&sub).await.unwrap();

        let err = store.create(juan()).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));

        let err = store.delete(&kept.id).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));

        assert_eq!(store.list().await.unwrap(), vec![kept.clone()]);
        assert_eq!(store.get(&kept.id).await.unwrap(), Some(kept));
    }
}
