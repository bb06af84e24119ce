use crate::commands::{CmdMessage, CmdResult, FolderUpdate};
use crate::editor::FolderEditor;
use crate::error::Result;
use crate::index::FolderSelector;
use crate::store::DataStore;

use super::helpers::resolve_selector;

pub fn run<S: DataStore>(
    store: &mut S,
    selector: &FolderSelector,
    update: &FolderUpdate,
) -> Result<CmdResult> {
    let target = resolve_selector(store, selector)?;
    let folders = store.list_folders()?;

    let mut editor = FolderEditor::open(&folders, Some(target.folder.id));
    if let Some(name) = &update.name {
        editor.draft.name = name.clone();
    }
    if let Some(icon) = update.icon {
        editor.draft.icon = icon;
    }
    if let Some(kind) = update.kind {
        editor.draft.is_stock = kind.is_stock();
    }

    let folder = editor.save(store)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Folder saved ({}): {} ({}, {})",
        target.index,
        folder.name,
        folder.kind(),
        folder.icon
    )));
    Ok(result.with_affected_folders(vec![folder]))
}
