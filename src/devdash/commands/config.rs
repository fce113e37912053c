use crate::commands::{CmdMessage, CmdResult};
use crate::config::DevDashConfig;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    fn new(key: &str, value: String) -> Self {
        Self {
            key: key.to_string(),
            value,
        }
    }
}

pub fn run(
    config: &mut DevDashConfig,
    config_dir: &Path,
    action: ConfigAction,
) -> Result<CmdResult<ConfigEntry>> {
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {
            result.records = config
                .entries()
                .into_iter()
                .map(|(key, value)| ConfigEntry::new(key, value))
                .collect();
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.records.push(ConfigEntry::new(&key, value));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            result.records.push(ConfigEntry::new(&key, config.get(&key)?));
        }
    }
    Ok(result)
}
