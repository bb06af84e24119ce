use crate::config::StockpileConfig;
use crate::index::DisplayFolder;
use crate::model::{Folder, ProductHit};

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod lookup;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_folders: Vec<Folder>,
    pub listed_folders: Vec<DisplayFolder>,
    pub product: Option<ProductHit>,
    pub config: Option<StockpileConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_folders(mut self, folders: Vec<Folder>) -> Self {
        self.affected_folders = folders;
        self
    }

    pub fn with_listed_folders(mut self, folders: Vec<DisplayFolder>) -> Self {
        self.listed_folders = folders;
        self
    }

    pub fn with_product(mut self, product: ProductHit) -> Self {
        self.product = Some(product);
        self
    }

    pub fn with_config(mut self, config: StockpileConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes requested for an existing folder. `None` keeps the stored
/// value.
#[derive(Debug, Clone, Default)]
pub struct FolderUpdate {
    pub name: Option<String>,
    pub icon: Option<crate::model::FolderIcon>,
    pub kind: Option<crate::model::FolderKind>,
}
