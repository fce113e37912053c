//! # API Facade
//!
//! [`DevDashApi`] is the single entry point for every devdash operation,
//! whatever the UI. It owns the store, the clock and the loaded configuration,
//! and dispatches to the command layer.
//!
//! The facade does no business logic and no I/O of its own: it returns
//! structured results and leaves presentation to the caller.
//!
//! ## Generic Over the Store
//!
//! - Production: `DevDashApi<FileStore>`
//! - Testing: `DevDashApi<MemoryStore>`
//!
//! Entity operations are generic over the record kind, so a UI picks the
//! collection with a type parameter:
//!
//! ```no_run
//! # use devdash::api::DevDashApi;
//! # use devdash::model::{NewSnippet, Snippet};
//! # fn demo(api: &mut DevDashApi<devdash::store::fs::FileStore>) -> devdash::error::Result<()> {
//! api.add::<Snippet>(NewSnippet { title: "Hello".into(), ..Default::default() })?;
//! let all = api.list::<Snippet>(None)?;
//! # Ok(())
//! # }
//! ```

use crate::activity::{self, Activity};
use crate::clock::Clock;
use crate::commands::{self, config::ConfigAction, config::ConfigEntry, reset::ResetTarget};
use crate::commands::{dashboard::DashboardSummary, CmdResult, Ctx};
use crate::config::DevDashConfig;
use crate::error::Result;
use crate::model::{LearningEntry, Project, Snippet};
use crate::persist::Persistence;
use crate::seed::Seeded;
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub struct DevDashApi<S: KeyValueStore> {
    persist: Persistence<S>,
    clock: Box<dyn Clock>,
    config: DevDashConfig,
    config_dir: PathBuf,
}

impl<S: KeyValueStore> DevDashApi<S> {
    pub fn new(
        store: S,
        clock: Box<dyn Clock>,
        config: DevDashConfig,
        config_dir: PathBuf,
    ) -> Self {
        Self {
            persist: Persistence::new(store),
            clock,
            config,
            config_dir,
        }
    }

    fn ctx(&self) -> Ctx<'_, S> {
        Ctx {
            persist: &self.persist,
            clock: self.clock.as_ref(),
            config: &self.config,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &S {
        self.persist.store()
    }

    /// Today according to the API's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // --- Entities ---

    pub fn add<T: Seeded>(&mut self, draft: T::Draft) -> Result<CmdResult<T>> {
        commands::add::run(&self.ctx(), draft)
    }

    pub fn list<T: Seeded>(&self, search: Option<&str>) -> Result<CmdResult<T>> {
        commands::list::run(&self.ctx(), search)
    }

    pub fn view<T: Seeded, I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult<T>> {
        commands::view::run(&self.ctx(), ids)
    }

    pub fn update<T: Seeded>(&mut self, id: &str, patch: T::Patch) -> Result<CmdResult<T>> {
        commands::update::run(&self.ctx(), id, patch)
    }

    pub fn delete<T: Seeded, I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult<T>> {
        commands::delete::run(&self.ctx(), ids)
    }

    // --- Activity ---

    pub fn dashboard(&mut self) -> Result<DashboardSummary> {
        commands::dashboard::run(&self.ctx())
    }

    pub fn record_visit_and_get_streak(&mut self) -> u32 {
        activity::record_visit_and_get_streak(&self.persist, self.clock.as_ref())
    }

    pub fn recent_activity(&self) -> Vec<Activity> {
        let ctx = self.ctx();
        activity::recent_activity(
            ctx.collection::<Snippet>().items(),
            ctx.collection::<LearningEntry>().items(),
            ctx.collection::<Project>().items(),
            self.config.feed_options(),
        )
    }

    // --- Maintenance ---

    pub fn reset(&mut self, target: ResetTarget) -> CmdResult<String> {
        commands::reset::run(&self.persist, target)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult<ConfigEntry>> {
        commands::config::run(&mut self.config, &self.config_dir, action)
    }
}
