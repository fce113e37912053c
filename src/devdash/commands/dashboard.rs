use crate::activity::{record_visit_and_get_streak, recent_activity, Activity};
use crate::commands::Ctx;
use crate::error::Result;
use crate::model::{LearningEntry, Project, Snippet};
use crate::store::KeyValueStore;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub snippet_count: usize,
    pub learning_count: usize,
    pub project_count: usize,
    pub streak: u32,
    pub activity: Vec<Activity>,
}

/// Record today's visit, then gather counts, streak and the activity feed.
pub fn run<S: KeyValueStore>(ctx: &Ctx<'_, S>) -> Result<DashboardSummary> {
    let streak = record_visit_and_get_streak(ctx.persist, ctx.clock);

    let snippets = ctx.collection::<Snippet>();
    let entries = ctx.collection::<LearningEntry>();
    let projects = ctx.collection::<Project>();

    Ok(DashboardSummary {
        snippet_count: snippets.len(),
        learning_count: entries.len(),
        project_count: projects.len(),
        streak,
        activity: recent_activity(
            snippets.items(),
            entries.items(),
            projects.items(),
            ctx.config.feed_options(),
        ),
    })
}
