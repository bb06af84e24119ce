use super::DataStore;
use crate::error::{Result, StockpileError};
use crate::model::{sort_folders, Folder};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const DATA_FILENAME: &str = "folders.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StockpileError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<HashMap<Uuid, Folder>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(StockpileError::Io)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        let folders: HashMap<Uuid, Folder> =
            serde_json::from_str(&content).map_err(StockpileError::Serialization)?;
        Ok(folders)
    }

    fn commit(&self, folders: &HashMap<Uuid, Folder>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(folders).map_err(StockpileError::Serialization)?;

        // Write then rename so a crash mid-write leaves the old file intact.
        let tmp = self.root.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp, content).map_err(StockpileError::Io)?;
        fs::rename(&tmp, self.data_file()).map_err(StockpileError::Io)?;
        debug!(count = folders.len(), path = %self.data_file().display(), "folders committed");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_folder(&mut self, folder: &Folder) -> Result<()> {
        let mut folders = self.load()?;
        folders.insert(folder.id, folder.clone());
        self.commit(&folders)
    }

    fn get_folder(&self, id: &Uuid) -> Result<Folder> {
        self.load()?
            .remove(id)
            .ok_or(StockpileError::FolderNotFound(*id))
    }

    fn list_folders(&self) -> Result<Vec<Folder>> {
        let mut folders: Vec<Folder> = self.load()?.into_values().collect();
        sort_folders(&mut folders);
        Ok(folders)
    }

    fn delete_folder(&mut self, id: &Uuid) -> Result<()> {
        let mut folders = self.load()?;
        if folders.remove(id).is_none() {
            return Err(StockpileError::FolderNotFound(*id));
        }
        self.commit(&folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FolderIcon;

    #[test]
    fn missing_file_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.list_folders().unwrap().is_empty());
    }

    #[test]
    fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let folder = Folder::new("Fridge", FolderIcon::Refrigerator, true);

        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_folder(&folder).unwrap();

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(reopened.get_folder(&folder.id).unwrap(), folder);
        assert!(dir.path().join(DATA_FILENAME).exists());
        assert!(!dir.path().join("folders.json.tmp").exists());
    }

    #[test]
    fn delete_unknown_folder_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let err = store.delete_folder(&Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StockpileError::FolderNotFound(_)));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DATA_FILENAME), "{not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.list_folders(),
            Err(StockpileError::Serialization(_))
        ));
    }
}
