//! # devdash Architecture
//!
//! devdash is a personal developer dashboard: code snippets, a learning log and
//! side projects, plus a daily visit streak and a recent-activity feed. It is
//! a library with a thin CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, owns the exit code     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - DevDashApi<S>: owns store, clock and config              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / list / view / update / delete, dashboard, reset    │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (collection.rs, activity.rs, persist.rs)              │
//! │  - Entity collections, streak and feed, lenient load/save   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait: FileStore, MemoryStore              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Stored data is a convenience cache for one user. Reading a collection that
//! is missing or malformed yields its default, and a failed write is logged and
//! skipped. Neither ever reaches the UI as an error. Errors that *do* surface
//! come from user input (empty titles, ambiguous ids, bad config values) and
//! from configuration files.
//!
//! ## Time
//!
//! All dates come from an injected [`clock::Clock`], so streak and date logic
//! is deterministic under test.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`collection`]: Add/update/delete façade over a stored collection
//! - [`activity`]: Visit streak and recent-activity feed
//! - [`persist`]: Lenient load/save and id generation
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Snippets, learning entries, projects
//! - [`seed`]: Bundled starter data
//! - [`config`]: Configuration and data directory resolution
//! - [`clock`]: System and fixed clocks
//! - [`error`]: Error types

pub mod activity;
pub mod api;
pub mod clock;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod persist;
pub mod seed;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
