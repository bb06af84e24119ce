use super::DataStore;
use crate::error::{Result, StockpileError};
use crate::model::{sort_folders, Folder};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    folders: HashMap<Uuid, Folder>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_folder(&mut self, folder: &Folder) -> Result<()> {
        self.folders.insert(folder.id, folder.clone());
        Ok(())
    }

    fn get_folder(&self, id: &Uuid) -> Result<Folder> {
        self.folders
            .get(id)
            .cloned()
            .ok_or(StockpileError::FolderNotFound(*id))
    }

    fn list_folders(&self) -> Result<Vec<Folder>> {
        let mut folders: Vec<Folder> = self.folders.values().cloned().collect();
        sort_folders(&mut folders);
        Ok(folders)
    }

    fn delete_folder(&mut self, id: &Uuid) -> Result<()> {
        if self.folders.remove(id).is_none() {
            return Err(StockpileError::FolderNotFound(*id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::FolderIcon;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_stock(mut self, name: &str) -> Self {
            let folder = Folder::new(name, FolderIcon::House, true);
            self.store.save_folder(&folder).unwrap();
            self
        }

        pub fn with_shopping(mut self, name: &str) -> Self {
            let folder = Folder::new(name, FolderIcon::Cart, false);
            self.store.save_folder(&folder).unwrap();
            self
        }

        pub fn id_of(&self, name: &str) -> Uuid {
            self.store
                .folders
                .values()
                .find(|f| f.name == name)
                .map(|f| f.id)
                .unwrap()
        }

        pub fn folders(&self) -> Vec<Folder> {
            self.store.list_folders().unwrap()
        }
    }

    /// A store whose writes always fail, for exercising commit errors.
    #[derive(Default)]
    pub struct FailingStore {
        pub inner: InMemoryStore,
    }

    impl DataStore for FailingStore {
        fn save_folder(&mut self, _folder: &Folder) -> Result<()> {
            Err(StockpileError::Store("disk full".to_string()))
        }

        fn get_folder(&self, id: &Uuid) -> Result<Folder> {
            self.inner.get_folder(id)
        }

        fn list_folders(&self) -> Result<Vec<Folder>> {
            self.inner.list_folders()
        }

        fn delete_folder(&mut self, _id: &Uuid) -> Result<()> {
            Err(StockpileError::Store("disk full".to_string()))
        }
    }
}
