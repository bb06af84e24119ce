//! # Display Indexes
//!
//! Folder ids are UUIDs, which nobody wants to type. Listings number folders
//! `1..n` in store order (id descending) and every command accepts that number
//! back, alongside a full id or the exact folder name. A folder whose name is
//! itself a number ("2024") is matched by name before the number is read as a
//! list position.

use crate::model::Folder;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user input that picks one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderSelector {
    Index(usize),
    Id(Uuid),
    Name(String),
}

impl fmt::Display for FolderSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderSelector::Index(i) => write!(f, "{}", i),
            FolderSelector::Id(id) => write!(f, "{}", id),
            FolderSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for FolderSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            if n > 0 {
                return Ok(FolderSelector::Index(n));
            }
        }
        if let Ok(id) = Uuid::parse_str(trimmed) {
            return Ok(FolderSelector::Id(id));
        }
        Ok(FolderSelector::Name(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayFolder {
    pub index: usize,
    pub folder: Folder,
}

/// Numbers folders from 1 in the order given.
pub fn index_folders(folders: Vec<Folder>) -> Vec<DisplayFolder> {
    folders
        .into_iter()
        .enumerate()
        .map(|(i, folder)| DisplayFolder {
            index: i + 1,
            folder,
        })
        .collect()
}
