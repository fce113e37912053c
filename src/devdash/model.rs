//! # Data Model
//!
//! The three tracked record kinds and the [`Entity`] trait that lets a single
//! [`crate::collection::Collection`] manage all of them.
//!
//! Every record has a string `id` assigned at creation and never changed. The
//! JSON shape uses camelCase field names so that data written by older
//! dashboards keeps loading.
//!
//! Each kind comes with two companion types:
//! - a **draft** (`NewSnippet`, ...): the user-supplied fields for `add`.
//! - a **patch** (`SnippetPatch`, ...): every editable field optional, for
//!   `update`. Fields left as `None` keep their current value.
//!
//! Neither carries `id` or creation dates, so those cannot be overwritten.

use crate::error::{DashError, Result};
use crate::store::{LEARNING_KEY, PROJECTS_KEY, SNIPPETS_KEY};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A record kind stored as one collection under a fixed key.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    type Draft;
    type Patch;

    const KEY: &'static str;
    /// Singular human-facing noun, used in messages.
    const NOUN: &'static str;

    fn create(id: String, today: NaiveDate, draft: Self::Draft) -> Self;

    fn draft_title(draft: &Self::Draft) -> &str;

    /// Merge `patch` into this record.
    fn apply(&mut self, patch: Self::Patch, today: NaiveDate);

    fn id(&self) -> &str;

    fn title(&self) -> &str;

    /// Case-insensitive substring match used by search. `term` is already
    /// lowercased.
    fn matches(&self, term: &str) -> bool;
}

fn contains_ci(haystack: &str, lowered_term: &str) -> bool {
    haystack.to_lowercase().contains(lowered_term)
}

fn any_contains_ci(items: &[String], lowered_term: &str) -> bool {
    items.iter().any(|i| contains_ci(i, lowered_term))
}

/// Split comma separated user input into trimmed, non-empty items.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// --- Snippets ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub description: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct NewSnippet {
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct SnippetPatch {
    pub title: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

impl Entity for Snippet {
    type Draft = NewSnippet;
    type Patch = SnippetPatch;

    const KEY: &'static str = SNIPPETS_KEY;
    const NOUN: &'static str = "Snippet";

    fn draft_title(draft: &NewSnippet) -> &str {
        &draft.title
    }

    fn create(id: String, today: NaiveDate, draft: NewSnippet) -> Self {
        Self {
            id,
            title: draft.title,
            code: draft.code,
            language: draft.language,
            tags: draft.tags,
            description: draft.description,
            created_at: today,
        }
    }

    fn apply(&mut self, patch: SnippetPatch, _today: NaiveDate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn matches(&self, term: &str) -> bool {
        contains_ci(&self.title, term) || any_contains_ci(&self.tags, term)
    }
}

// --- Learning log ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewLearningEntry {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LearningPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Entity for LearningEntry {
    type Draft = NewLearningEntry;
    type Patch = LearningPatch;

    const KEY: &'static str = LEARNING_KEY;
    const NOUN: &'static str = "Learning entry";

    fn draft_title(draft: &NewLearningEntry) -> &str {
        &draft.title
    }

    fn create(id: String, today: NaiveDate, draft: NewLearningEntry) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            date: today,
            tags: draft.tags,
        }
    }

    fn apply(&mut self, patch: LearningPatch, _today: NaiveDate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn matches(&self, term: &str) -> bool {
        contains_ci(&self.title, term)
            || contains_ci(&self.category, term)
            || any_contains_ci(&self.tags, term)
    }
}

// --- Projects ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    Paused,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Paused => "paused",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Paused => "Paused",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "planning" => Ok(ProjectStatus::Planning),
            "in-progress" | "inprogress" | "in_progress" => Ok(ProjectStatus::InProgress),
            "completed" | "done" => Ok(ProjectStatus::Completed),
            "paused" => Ok(ProjectStatus::Paused),
            other => Err(DashError::Api(format!(
                "Unknown project status: {} (expected planning, in-progress, completed or paused)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub start_date: NaiveDate,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl Default for NewProject {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: ProjectStatus::Planning,
            technologies: Vec::new(),
            github_url: None,
            live_url: None,
        }
    }
}

/// Optional URLs use a nested option: `Some(None)` clears the link.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<Option<String>>,
    pub live_url: Option<Option<String>>,
}

impl Entity for Project {
    type Draft = NewProject;
    type Patch = ProjectPatch;

    const KEY: &'static str = PROJECTS_KEY;
    const NOUN: &'static str = "Project";

    fn draft_title(draft: &NewProject) -> &str {
        &draft.title
    }

    fn create(id: String, today: NaiveDate, draft: NewProject) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            technologies: draft.technologies,
            github_url: draft.github_url,
            live_url: draft.live_url,
            start_date: today,
            last_updated: today,
        }
    }

    fn apply(&mut self, patch: ProjectPatch, today: NaiveDate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
        if let Some(github_url) = patch.github_url {
            self.github_url = github_url;
        }
        if let Some(live_url) = patch.live_url {
            self.live_url = live_url;
        }
        self.last_updated = today;
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn matches(&self, term: &str) -> bool {
        contains_ci(&self.title, term) || any_contains_ci(&self.technologies, term)
    }
}
