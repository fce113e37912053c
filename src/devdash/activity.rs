//! # Activity
//!
//! Two read-only views derived from persisted state:
//!
//! - **Streak**: the number of consecutive calendar days, ending today, on
//!   which the dashboard was opened. Visits are recorded in the `visitDates`
//!   collection, one entry per distinct day.
//! - **Recent activity**: a short feed merging the newest records of every
//!   tracked collection, newest first.
//!
//! "Newest records" means the last few records in stored (insertion) order.
//! Editing a record does not move it, so an old snippet edited today still
//! reports its creation date; projects report `lastUpdated`.
//!
//! [`record_visit`] must run before [`streak`] in a session, otherwise a
//! streak that has not been extended today reads as zero.

use crate::clock::Clock;
use crate::model::{LearningEntry, Project, Snippet};
use crate::persist::Persistence;
use crate::store::{KeyValueStore, VISITS_KEY};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub const DEFAULT_PER_KIND: usize = 3;
pub const DEFAULT_LIMIT: usize = 5;

/// Record today as a visit day. Idempotent within one calendar day.
pub fn record_visit<S: KeyValueStore>(persist: &Persistence<S>, clock: &dyn Clock) {
    let today = clock.today();
    let mut visits: Vec<NaiveDate> = persist.load(VISITS_KEY, Vec::new());
    if visits.contains(&today) {
        return;
    }
    visits.push(today);
    persist.save(VISITS_KEY, &visits);
    debug!(%today, total = visits.len(), "recorded visit");
}

/// Current streak of consecutive visit days ending today.
pub fn streak<S: KeyValueStore>(persist: &Persistence<S>, clock: &dyn Clock) -> u32 {
    let visits: Vec<NaiveDate> = persist.load(VISITS_KEY, Vec::new());
    streak_from(&visits, clock.today())
}

/// Walk visits newest first, counting days until the first gap.
///
/// Duplicates and dates after `today` are skipped.
pub fn streak_from(visits: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut sorted = visits.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak: u32 = 0;
    for visit in sorted {
        let days_diff = (today - visit).num_days();
        if days_diff == i64::from(streak) {
            streak += 1;
        } else if days_diff < i64::from(streak) {
            continue;
        } else {
            break;
        }
    }
    streak
}

pub fn record_visit_and_get_streak<S: KeyValueStore>(
    persist: &Persistence<S>,
    clock: &dyn Clock,
) -> u32 {
    record_visit(persist, clock);
    streak(persist, clock)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Snippet,
    Learning,
    Project,
}

impl ActivityKind {
    fn verb(&self) -> &'static str {
        match self {
            ActivityKind::Snippet => "Created",
            ActivityKind::Learning => "Learned",
            ActivityKind::Project => "Updated",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityKind::Snippet => "snippet",
            ActivityKind::Learning => "learning",
            ActivityKind::Project => "project",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: String,
    /// Display label, e.g. "Created 2024-01-03".
    pub label: String,
    pub date: NaiveDate,
}

impl Activity {
    fn new(kind: ActivityKind, title: &str, date: NaiveDate) -> Self {
        Self {
            kind,
            title: title.to_string(),
            label: format!("{} {}", kind.verb(), date.format("%Y-%m-%d")),
            date,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FeedOptions {
    /// How many trailing records to take from each collection.
    pub per_kind: usize,
    /// Maximum feed length.
    pub limit: usize,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            per_kind: DEFAULT_PER_KIND,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn tail<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Merge the tail of each collection into one feed sorted newest first.
///
/// Ties keep snippet, learning, project order.
pub fn recent_activity(
    snippets: &[Snippet],
    entries: &[LearningEntry],
    projects: &[Project],
    options: FeedOptions,
) -> Vec<Activity> {
    let mut feed: Vec<Activity> = tail(snippets, options.per_kind)
        .iter()
        .map(|s| Activity::new(ActivityKind::Snippet, &s.title, s.created_at))
        .chain(
            tail(entries, options.per_kind)
                .iter()
                .map(|e| Activity::new(ActivityKind::Learning, &e.title, e.date)),
        )
        .chain(
            tail(projects, options.per_kind)
                .iter()
                .map(|p| Activity::new(ActivityKind::Project, &p.title, p.last_updated)),
        )
        .collect();

    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(options.limit);
    feed
}
