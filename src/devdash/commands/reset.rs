use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DashError, Result};
use crate::persist::Persistence;
use crate::store::{KeyValueStore, LEARNING_KEY, PROJECTS_KEY, SNIPPETS_KEY, VISITS_KEY};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    Snippets,
    Learning,
    Projects,
    Visits,
    All,
}

impl ResetTarget {
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            ResetTarget::Snippets => &[SNIPPETS_KEY],
            ResetTarget::Learning => &[LEARNING_KEY],
            ResetTarget::Projects => &[PROJECTS_KEY],
            ResetTarget::Visits => &[VISITS_KEY],
            ResetTarget::All => &[SNIPPETS_KEY, LEARNING_KEY, PROJECTS_KEY, VISITS_KEY],
        }
    }
}

impl FromStr for ResetTarget {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "snippets" => Ok(ResetTarget::Snippets),
            "learning" => Ok(ResetTarget::Learning),
            "projects" => Ok(ResetTarget::Projects),
            "visits" => Ok(ResetTarget::Visits),
            "all" => Ok(ResetTarget::All),
            other => Err(DashError::Api(format!("Unknown collection: {}", other))),
        }
    }
}

/// Clear stored collections. Cleared entity collections show seed data again
/// (when seeding is enabled); clearing visits restarts the streak.
pub fn run<S: KeyValueStore>(
    persist: &Persistence<S>,
    target: ResetTarget,
) -> CmdResult<String> {
    let mut result = CmdResult::default();
    for key in target.keys() {
        persist.clear(key);
        result.add_message(CmdMessage::success(format!("Cleared {}", key)));
        result.records.push(key.to_string());
    }
    result
}
