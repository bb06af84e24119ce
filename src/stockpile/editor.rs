//! # Folder Editor
//!
//! An edit session over the folder collection. A session either targets an
//! existing folder (edit mode) or nothing (creation mode), and holds the draft
//! name, icon and kind the user is working on.
//!
//! The rules that decide which actions are available live here:
//!
//! - saving needs a non-empty name and at least one changed field
//!   ([`FolderEditor::can_save`]);
//! - the last folder of a kind can be neither retyped nor deleted
//!   ([`is_last_of_type`]).
//!
//! Every check works on a folder slice in store order, so the same functions
//! serve a UI that wants to grey out controls and the commands that refuse
//! the action outright.

use crate::error::{Result, StockpileError};
use crate::model::{Folder, FolderIcon, FolderKind};
use crate::store::DataStore;
use tracing::{debug, warn};
use uuid::Uuid;

/// Position of the folder with `id` in `folders`.
pub fn find_by_id(folders: &[Folder], id: &Uuid) -> Option<usize> {
    folders.iter().position(|f| &f.id == id)
}

/// True iff `target` is the only folder of its kind. Always false in creation
/// mode or when the target does not resolve.
pub fn is_last_of_type(folders: &[Folder], target: Option<Uuid>) -> bool {
    let Some(index) = target.and_then(|id| find_by_id(folders, &id)) else {
        return false;
    };
    let is_stock = folders[index].is_stock;
    folders.iter().filter(|f| f.is_stock == is_stock).count() == 1
}

/// True iff the draft differs from the stored target. Always true in creation
/// mode.
pub fn has_changes(
    folders: &[Folder],
    target: Option<Uuid>,
    name: &str,
    icon: FolderIcon,
    is_stock: bool,
) -> bool {
    match target.and_then(|id| find_by_id(folders, &id)) {
        Some(index) => {
            let stored = &folders[index];
            stored.name != name || stored.icon != icon || stored.is_stock != is_stock
        }
        None => true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderDraft {
    pub name: String,
    pub icon: FolderIcon,
    pub is_stock: bool,
}

impl Default for FolderDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            icon: FolderIcon::House,
            is_stock: true,
        }
    }
}

impl From<&Folder> for FolderDraft {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            icon: folder.icon,
            is_stock: folder.is_stock,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FolderEditor {
    target: Option<Uuid>,
    pub draft: FolderDraft,
}

impl FolderEditor {
    /// A session that will create a new folder.
    pub fn create() -> Self {
        Self::default()
    }

    /// Opens a session on `target`, seeding the draft from the stored folder.
    ///
    /// An id that does not resolve falls back to creation mode.
    pub fn open(folders: &[Folder], target: Option<Uuid>) -> Self {
        let Some(id) = target else {
            debug!("opening folder editor in creation mode");
            return Self::create();
        };
        match find_by_id(folders, &id) {
            Some(index) => Self {
                target: Some(id),
                draft: FolderDraft::from(&folders[index]),
            },
            None => {
                warn!(%id, "no folder matches id, editing a new folder instead");
                Self::create()
            }
        }
    }

    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_last_of_type(&self, folders: &[Folder]) -> bool {
        is_last_of_type(folders, self.target)
    }

    pub fn has_changes(&self, folders: &[Folder]) -> bool {
        has_changes(
            folders,
            self.target,
            &self.draft.name,
            self.draft.icon,
            self.draft.is_stock,
        )
    }

    pub fn can_save(&self, folders: &[Folder]) -> bool {
        !self.draft.name.is_empty() && self.has_changes(folders)
    }

    pub fn can_change_type(&self, folders: &[Folder]) -> bool {
        !self.is_last_of_type(folders)
    }

    pub fn can_delete(&self, folders: &[Folder]) -> bool {
        self.is_editing() && !self.is_last_of_type(folders)
    }

    /// Checks the draft against `folders` without touching the store.
    pub fn validate(&self, folders: &[Folder]) -> Result<()> {
        if self.draft.name.is_empty() {
            return Err(StockpileError::EmptyName);
        }
        if !self.has_changes(folders) {
            return Err(StockpileError::NoChanges);
        }
        if let Some(index) = self.target.and_then(|id| find_by_id(folders, &id)) {
            let stored = &folders[index];
            if stored.is_stock != self.draft.is_stock && self.is_last_of_type(folders) {
                return Err(StockpileError::LastOfType(stored.kind()));
            }
        }
        Ok(())
    }

    /// Writes the draft: overwrites the target in edit mode, inserts a folder
    /// with a fresh id in creation mode.
    pub fn save<S: DataStore>(&self, store: &mut S) -> Result<Folder> {
        let folders = store.list_folders()?;
        self.validate(&folders)?;

        let folder = match self.target.and_then(|id| find_by_id(&folders, &id)) {
            Some(index) => {
                let mut folder = folders[index].clone();
                folder.name = self.draft.name.clone();
                folder.icon = self.draft.icon;
                folder.is_stock = self.draft.is_stock;
                folder
            }
            None => Folder::new(self.draft.name.clone(), self.draft.icon, self.draft.is_stock),
        };

        store.save_folder(&folder)?;
        debug!(id = %folder.id, name = %folder.name, "folder saved");
        Ok(folder)
    }

    /// Removes the target. Returns `None` when the target is gone already.
    pub fn delete<S: DataStore>(&self, store: &mut S) -> Result<Option<Folder>> {
        let Some(id) = self.target else {
            return Err(StockpileError::Api(
                "Only an existing folder can be deleted".to_string(),
            ));
        };
        let folders = store.list_folders()?;
        let Some(index) = find_by_id(&folders, &id) else {
            warn!(%id, "no folder matches id, nothing deleted");
            return Ok(None);
        };
        if self.is_last_of_type(&folders) {
            return Err(StockpileError::LastOfType(FolderKind::from_flag(
                folders[index].is_stock,
            )));
        }

        store.delete_folder(&id)?;
        debug!(%id, "folder deleted");
        Ok(Some(folders[index].clone()))
    }
}
