//! # Storage Layer
//!
//! Folders are persisted behind the [`DataStore`] trait so the command layer
//! never knows where they live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single `folders.json` in the data
//!   directory (a JSON object keyed by folder id).
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! ## Commit Semantics
//!
//! Every mutating call is committed before it returns. A failed commit is
//! reported as an error to the caller; nothing is retried.
//!
//! ## Guard Rules
//!
//! The store does not know about the "one folder of each kind" rule. Deleting
//! or retyping the last folder of a kind is refused by the command layer, not
//! here.

use crate::error::Result;
use crate::model::Folder;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for folder storage.
pub trait DataStore {
    /// Insert or overwrite a folder.
    fn save_folder(&mut self, folder: &Folder) -> Result<()>;

    /// Get a folder by id.
    fn get_folder(&self, id: &Uuid) -> Result<Folder>;

    /// All folders, ordered by id descending.
    fn list_folders(&self) -> Result<Vec<Folder>>;

    /// Remove a folder permanently.
    fn delete_folder(&mut self, id: &Uuid) -> Result<()>;
}
