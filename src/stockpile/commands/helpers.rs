use crate::error::{Result, StockpileError};
use crate::index::{index_folders, DisplayFolder, FolderSelector};
use crate::store::DataStore;

pub fn indexed_folders<S: DataStore>(store: &S) -> Result<Vec<DisplayFolder>> {
    let folders = store.list_folders()?;
    Ok(index_folders(folders))
}

/// Finds the folder a selector names. A numeric input that is also the exact
/// name of a folder picks that folder rather than the list position.
pub fn resolve_selector<S: DataStore>(store: &S, selector: &FolderSelector) -> Result<DisplayFolder> {
    let indexed = indexed_folders(store)?;

    let found = match selector {
        FolderSelector::Index(n) => match find_named(&indexed, &n.to_string())? {
            Some(named) => Some(named),
            None => indexed.into_iter().find(|df| df.index == *n),
        },
        FolderSelector::Id(id) => indexed.into_iter().find(|df| df.folder.id == *id),
        FolderSelector::Name(name) => find_named(&indexed, name)?,
    };

    found.ok_or_else(|| StockpileError::Api(format!("No folder matches {}", selector)))
}

fn find_named(indexed: &[DisplayFolder], name: &str) -> Result<Option<DisplayFolder>> {
    let mut matches = indexed.iter().filter(|df| df.folder.name == name);
    let first = matches.next().cloned();
    if matches.next().is_some() {
        return Err(StockpileError::Api(format!(
            "Several folders are named \"{}\"; use the id instead",
            name
        )));
    }
    Ok(first)
}
