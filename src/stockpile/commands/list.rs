use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::FolderKind;
use crate::store::DataStore;

use super::helpers::indexed_folders;

/// Lists folders with their display indexes. Filtering by kind keeps the
/// indexes of the full listing so they can be passed back to other commands.
pub fn run<S: DataStore>(store: &S, kind: Option<FolderKind>) -> Result<CmdResult> {
    let folders = indexed_folders(store)?;
    let listed = match kind {
        Some(kind) => folders
            .into_iter()
            .filter(|df| df.folder.kind() == kind)
            .collect(),
        None => folders,
    };

    Ok(CmdResult::default().with_listed_folders(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_folders() {
        let fx = StoreFixture::new().with_stock("Pantry").with_shopping("Groceries");
        let result = run(&fx.store, None).unwrap();
        assert_eq!(result.listed_folders.len(), 2);
        assert_eq!(result.listed_folders[0].index, 1);
    }

    #[test]
    fn filter_keeps_full_listing_indexes() {
        let fx = StoreFixture::new()
            .with_stock("Pantry")
            .with_stock("Freezer")
            .with_shopping("Groceries");
        let all = run(&fx.store, None).unwrap();
        let groceries_index = all
            .listed_folders
            .iter()
            .find(|df| df.folder.name == "Groceries")
            .map(|df| df.index)
            .unwrap();

        let shopping = run(&fx.store, Some(FolderKind::Shopping)).unwrap();
        assert_eq!(shopping.listed_folders.len(), 1);
        assert_eq!(shopping.listed_folders[0].index, groceries_index);
    }
}
