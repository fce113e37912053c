//! # Storage Layer
//!
//! devdash keeps everything in a flat key-value store: each tracked collection
//! is one JSON array stored under a fixed string key. The [`KeyValueStore`]
//! trait abstracts that store so the rest of the crate never reaches for a
//! process-wide global.
//!
//! ## Keys
//!
//! | Key               | Contents                    |
//! |-------------------|-----------------------------|
//! | `snippets`        | `Vec<Snippet>`              |
//! | `learningEntries` | `Vec<LearningEntry>`        |
//! | `projects`        | `Vec<Project>`              |
//! | `visitDates`      | `Vec<NaiveDate>` (YYYY-MM-DD) |
//!
//! Every write replaces the whole value. There are no partial or delta writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<key>.json` file per key inside a data directory.
//! - [`memory::MemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.local/share/devdash/
//! ├── config.json
//! ├── snippets.json
//! ├── learningEntries.json
//! ├── projects.json
//! └── visitDates.json
//! ```
//!
//! Store implementations report failures through [`Result`]. Deciding that a
//! failure is non-fatal is the job of [`crate::persist::Persistence`], not of
//! the store.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub const SNIPPETS_KEY: &str = "snippets";
pub const LEARNING_KEY: &str = "learningEntries";
pub const PROJECTS_KEY: &str = "projects";
pub const VISITS_KEY: &str = "visitDates";

/// Abstract interface for raw string storage.
pub trait KeyValueStore {
    /// Read the raw value for `key`.
    /// Returns Ok(None) if nothing has been stored under it.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
