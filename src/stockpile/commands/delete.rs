use crate::commands::{CmdMessage, CmdResult};
use crate::editor::FolderEditor;
use crate::error::Result;
use crate::index::FolderSelector;
use crate::store::DataStore;

use super::helpers::resolve_selector;

pub fn run<S: DataStore>(store: &mut S, selector: &FolderSelector) -> Result<CmdResult> {
    let target = resolve_selector(store, selector)?;
    let folders = store.list_folders()?;
    let editor = FolderEditor::open(&folders, Some(target.folder.id));

    let mut result = CmdResult::default();
    match editor.delete(store)? {
        Some(folder) => {
            result.add_message(CmdMessage::success(format!(
                "Folder deleted ({}): {}",
                target.index, folder.name
            )));
            result.affected_folders.push(folder);
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Folder {} was already gone",
                target.folder.name
            )));
        }
    }

    Ok(result)
}
