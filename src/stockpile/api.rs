//! # API Facade
//!
//! The single entry point for every stockpile operation, whatever the UI.
//!
//! The facade parses user selectors, picks the command and returns its
//! structured result. It holds no business logic (that is `commands/*.rs`)
//! and never prints.
//!
//! `StockpileApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::config::StockpileConfig;
use crate::editor::FolderDraft;
use crate::error::Result;
use crate::index::FolderSelector;
use crate::lookup::{LookupConfig, LookupSession, ProductLookup};
use crate::model::FolderKind;
use crate::store::DataStore;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct StockpileApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> StockpileApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn list_folders(&self, kind: Option<FolderKind>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, kind)
    }

    pub fn create_folder(&mut self, draft: FolderDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_folder<I: AsRef<str>>(
        &mut self,
        folder: I,
        update: &commands::FolderUpdate,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(folder);
        commands::update::run(&mut self.store, &selector, update)
    }

    pub fn delete_folder<I: AsRef<str>>(&mut self, folder: I) -> Result<commands::CmdResult> {
        let selector = parse_selector(folder);
        commands::delete::run(&mut self.store, &selector)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    /// A lookup client built from the saved configuration. Fails if the
    /// endpoint or credential is missing.
    pub fn lookup_client(&self) -> Result<ProductLookup> {
        let config = StockpileConfig::load(&self.data_dir)?;
        let lookup = LookupConfig::from_settings(&config.lookup)?;
        Ok(ProductLookup::new(lookup))
    }

    pub fn lookup_session(&self) -> Result<LookupSession> {
        Ok(LookupSession::new(self.lookup_client()?))
    }

    pub fn lookup(&self, item_code: &str) -> Result<commands::CmdResult> {
        let client = self.lookup_client()?;
        commands::lookup::run(&client, item_code)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn parse_selector<I: AsRef<str>>(input: I) -> FolderSelector {
    match FolderSelector::from_str(input.as_ref()) {
        Ok(selector) => selector,
        Err(never) => match never {},
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, FolderUpdate, MessageLevel};
