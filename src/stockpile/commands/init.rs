use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Folder, FolderIcon, FolderKind};
use crate::store::DataStore;

/// Seeds a default folder for every kind the store has none of.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let existing = store.list_folders()?;

    let mut seeded = Vec::new();
    for kind in [FolderKind::Stock, FolderKind::Shopping] {
        if existing.iter().any(|f| f.kind() == kind) {
            continue;
        }
        let folder = match kind {
            FolderKind::Stock => Folder::new("Stock", FolderIcon::House, true),
            FolderKind::Shopping => Folder::new("Shopping", FolderIcon::Cart, false),
        };
        store.save_folder(&folder)?;
        result.add_message(CmdMessage::success(format!(
            "Created {} folder: {}",
            folder.kind(),
            folder.name
        )));
        seeded.push(folder);
    }

    if seeded.is_empty() {
        result.add_message(CmdMessage::info("Folders already exist, nothing to initialize."));
    }
    Ok(result.with_affected_folders(seeded))
}
