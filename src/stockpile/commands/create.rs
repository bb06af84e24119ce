use crate::commands::{CmdMessage, CmdResult};
use crate::editor::{FolderDraft, FolderEditor};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: FolderDraft) -> Result<CmdResult> {
    let mut editor = FolderEditor::create();
    editor.draft = draft;

    let folder = editor.save(store)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Folder saved: {} ({}, {})",
        folder.name,
        folder.kind(),
        folder.icon
    )));
    Ok(result.with_affected_folders(vec![folder]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockpileError;
    use crate::model::FolderIcon;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_folder_with_fresh_id() {
        let mut store = InMemoryStore::new();
        let draft = FolderDraft {
            name: "Garage".into(),
            icon: FolderIcon::Shippingbox,
            is_stock: true,
        };
        let first = run(&mut store, draft.clone()).unwrap();
        let second = run(&mut store, draft).unwrap();

        assert_ne!(first.affected_folders[0].id, second.affected_folders[0].id);
        assert_eq!(store.list_folders().unwrap().len(), 2);
    }

    #[test]
    fn rejects_empty_name() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, FolderDraft::default()).unwrap_err();
        assert!(matches!(err, StockpileError::EmptyName));
        assert!(store.list_folders().unwrap().is_empty());
    }
}
