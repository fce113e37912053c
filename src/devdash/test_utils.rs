use crate::clock::FixedClock;
use crate::commands::Ctx;
use crate::config::DevDashConfig;
use crate::persist::Persistence;
use crate::store::memory::MemoryStore;
use chrono::NaiveDate;

/// In-memory store, pinned clock and seedless config for command tests.
pub struct TestEnv {
    pub persist: Persistence<MemoryStore>,
    pub clock: FixedClock,
    pub config: DevDashConfig,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self::on(2024, 6, 15)
    }

    pub fn on(year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
        Self {
            persist: Persistence::new(MemoryStore::new()),
            clock: FixedClock::on(date),
            config: DevDashConfig {
                seed_on_first_run: false,
                ..Default::default()
            },
        }
    }

    pub fn with_seed(mut self) -> Self {
        self.config.seed_on_first_run = true;
        self
    }

    pub fn ctx(&self) -> Ctx<'_, MemoryStore> {
        Ctx {
            persist: &self.persist,
            clock: &self.clock,
            config: &self.config,
        }
    }
}
