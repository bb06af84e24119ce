use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockpileConfig;
use crate::error::{Result, StockpileError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config.json` under `dir`. Unknown keys and rejected
/// values are `Config` errors; a rejected value leaves the file untouched.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockpileConfig::load(dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => CmdMessage::info(lookup_key(&config, &key)?),
        ConfigAction::Set(key, value) => {
            config.set(&key, &value).map_err(StockpileError::Config)?;
            config.save(dir)?;
            let shown = lookup_key(&config, &key)?;
            CmdMessage::success(format!("{} set to {}", key, shown))
        }
    };

    let mut result = CmdResult::default().with_config(config);
    result.add_message(message);
    Ok(result)
}

fn lookup_key(config: &StockpileConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| StockpileError::Config(format!("Unknown config key: {}", key)))
}
