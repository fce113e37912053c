//! # Command Layer
//!
//! The business operations behind every devdash action. Each command lives in
//! its own submodule as plain functions over Rust types.
//!
//! Commands:
//! - operate on the typed collections through [`Collection`]
//! - return a structured [`CmdResult`] (records to show plus messages)
//! - never print, prompt, or exit
//!
//! Entity commands are generic over [`Seeded`], so the same `add`, `list`,
//! `view`, `update` and `delete` serve snippets, learning entries and projects.
//!
//! ## Command Modules
//!
//! - [`add`]: Create a record
//! - [`list`]: List or search a collection
//! - [`view`]: Fetch records by id
//! - [`update`]: Merge a patch into a record
//! - [`delete`]: Remove records
//! - [`dashboard`]: Record the visit, compute streak, counts and activity
//! - [`reset`]: Clear stored collections
//! - [`config`]: Show and change settings
//! - [`helpers`]: Id resolution shared by the above

use crate::clock::Clock;
use crate::collection::Collection;
use crate::config::DevDashConfig;
use crate::persist::Persistence;
use crate::seed::Seeded;
use crate::store::KeyValueStore;
use serde::Serialize;

pub mod add;
pub mod config;
pub mod dashboard;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod reset;
pub mod update;
pub mod view;

/// Everything a command needs to reach stored data.
pub struct Ctx<'a, S: KeyValueStore> {
    pub persist: &'a Persistence<S>,
    pub clock: &'a dyn Clock,
    pub config: &'a DevDashConfig,
}

impl<'a, S: KeyValueStore> Ctx<'a, S> {
    pub fn collection<T: Seeded>(&self) -> Collection<'a, S, T> {
        Collection::load(self.persist, self.clock, self.config.seed_on_first_run)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
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
}

#[derive(Debug)]
pub struct CmdResult<T> {
    pub records: Vec<T>,
    pub messages: Vec<CmdMessage>,
}

impl<T> Default for CmdResult<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl<T> CmdResult<T> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<T>) -> Self {
        self.records = records;
        self
    }
}
