//! Bundled starter data, shown until the user has saved a collection of
//! their own.

use crate::model::{Entity, LearningEntry, Project, Snippet};
use tracing::warn;

const SNIPPETS_JSON: &str = include_str!("data/snippets.json");
const LEARNING_JSON: &str = include_str!("data/learningEntries.json");
const PROJECTS_JSON: &str = include_str!("data/projects.json");

/// Entities that ship with a starter collection.
pub trait Seeded: Entity {
    fn seed() -> Vec<Self>;
}

fn parse<T: Entity>(raw: &str) -> Vec<T> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(key = T::KEY, error = %e, "bundled seed data is invalid");
        Vec::new()
    })
}

impl Seeded for Snippet {
    fn seed() -> Vec<Self> {
        parse(SNIPPETS_JSON)
    }
}

impl Seeded for LearningEntry {
    fn seed() -> Vec<Self> {
        parse(LEARNING_JSON)
    }
}

impl Seeded for Project {
    fn seed() -> Vec<Self> {
        parse(PROJECTS_JSON)
    }
}
