//! # Entity Collections
//!
//! [`Collection`] is the add/update/delete façade over one stored collection.
//! It holds an in-memory copy of the records and writes the *whole* collection
//! back through [`Persistence`] after every mutation.
//!
//! Loading falls back to bundled seed data (or an empty collection when
//! seeding is disabled) whenever the store holds nothing usable for the key.

use crate::clock::Clock;
use crate::error::{DashError, Result};
use crate::model::Entity;
use crate::persist::{generate_id, Persistence};
use crate::seed::Seeded;
use crate::store::KeyValueStore;

/// Shortest input treated as an id prefix.
pub const MIN_PREFIX_LEN: usize = 9;

pub struct Collection<'a, S: KeyValueStore, T: Entity> {
    persist: &'a Persistence<S>,
    clock: &'a dyn Clock,
    items: Vec<T>,
}

impl<'a, S: KeyValueStore, T: Seeded> Collection<'a, S, T> {
    pub fn load(persist: &'a Persistence<S>, clock: &'a dyn Clock, seed: bool) -> Self {
        let default = if seed { T::seed() } else { Vec::new() };
        Self {
            items: persist.load(T::KEY, default),
            persist,
            clock,
        }
    }
}

impl<'a, S: KeyValueStore, T: Entity> Collection<'a, S, T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Records whose searchable fields contain `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&T> {
        let term = term.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| term.is_empty() || item.matches(&term))
            .collect()
    }

    /// Map a full id or a unique id prefix to the stored id.
    ///
    /// Inputs shorter than [`MIN_PREFIX_LEN`] only match exactly, so a short
    /// id that no longer exists never lands on an unrelated record. Returns
    /// `Ok(None)` when nothing matches and an error when the prefix is shared
    /// by several records.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<Option<String>> {
        if let Some(item) = self.get(id_or_prefix) {
            return Ok(Some(item.id().to_string()));
        }
        if id_or_prefix.chars().count() < MIN_PREFIX_LEN {
            return Ok(None);
        }
        let candidates: Vec<&T> = self
            .items
            .iter()
            .filter(|item| item.id().starts_with(id_or_prefix))
            .collect();
        match candidates.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(only.id().to_string())),
            many => Err(DashError::Api(format!(
                "Id prefix '{}' is ambiguous ({} matches)",
                id_or_prefix,
                many.len()
            ))),
        }
    }

    /// Create a record with a fresh id and today's date, append it, persist.
    pub fn add(&mut self, draft: T::Draft) -> T {
        let item = T::create(generate_id(self.clock), self.clock.today(), draft);
        self.items.push(item.clone());
        self.persist();
        item
    }

    /// Merge `patch` into the record with `id`. Unknown ids change nothing.
    pub fn update(&mut self, id: &str, patch: T::Patch) -> Option<T> {
        let today = self.clock.today();
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.apply(patch, today);
        let updated = item.clone();
        self.persist();
        Some(updated)
    }

    /// Remove the record with `id`. Unknown ids change nothing.
    pub fn delete(&mut self, id: &str) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(pos);
        self.persist();
        Some(removed)
    }

    fn persist(&self) {
        self.persist.save(T::KEY, &self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::{
        LearningEntry, NewProject, NewSnippet, Project, ProjectPatch, ProjectStatus, Snippet,
        SnippetPatch,
    };
    use crate::store::memory::MemoryStore;
    use crate::store::SNIPPETS_KEY;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snippet(title: &str) -> NewSnippet {
        NewSnippet {
            title: title.into(),
            code: "let x = 1;".into(),
            language: "rust".into(),
            tags: vec!["basics".into()],
            description: String::new(),
        }
    }

    #[test]
    fn load_falls_back_to_seed() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 1, 1));
        let snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, true);
        assert_eq!(snippets.items(), Snippet::seed().as_slice());
        // Seeds are not written until the first mutation
        assert_eq!(persist.store().raw(SNIPPETS_KEY), None);
    }

    #[test]
    fn load_without_seed_is_empty() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 1, 1));
        let entries: Collection<_, LearningEntry> = Collection::load(&persist, &clock, false);
        assert!(entries.is_empty());
    }

    #[test]
    fn add_assigns_id_and_creation_date() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);

        let a = snippets.add(snippet("A"));
        let b = snippets.add(snippet("B"));

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, day(2024, 6, 1));
        assert_eq!(snippets.len(), 2);
    }

    #[test]
    fn add_persists_full_collection() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, true);
        let seeded = snippets.len();
        snippets.add(snippet("Mine"));

        let reloaded: Collection<_, Snippet> = Collection::load(&persist, &clock, true);
        assert_eq!(reloaded.len(), seeded + 1);
        assert_eq!(reloaded.items().last().unwrap().title, "Mine");
    }

    #[test]
    fn update_changes_only_supplied_fields() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        let target = snippets.add(snippet("A"));
        let other = snippets.add(snippet("B"));

        snippets.update(
            &target.id,
            SnippetPatch {
                language: Some("go".into()),
                ..Default::default()
            },
        );

        let updated = snippets.get(&target.id).unwrap();
        assert_eq!(updated.language, "go");
        assert_eq!(updated.title, target.title);
        assert_eq!(updated.code, target.code);
        assert_eq!(updated.id, target.id);
        assert_eq!(snippets.get(&other.id).unwrap(), &other);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        snippets.add(snippet("A"));
        let before = snippets.items().to_vec();

        assert!(snippets.update("missing", SnippetPatch::default()).is_none());
        assert_eq!(snippets.items(), before.as_slice());
    }

    #[test]
    fn project_update_rewrites_last_updated() {
        let persist = Persistence::new(MemoryStore::new());
        let created = FixedClock::on(day(2024, 1, 1));
        let mut projects: Collection<_, Project> = Collection::load(&persist, &created, false);
        let project = projects.add(NewProject {
            title: "CLI".into(),
            ..Default::default()
        });

        let later = FixedClock::on(day(2024, 2, 10));
        let mut projects: Collection<_, Project> = Collection::load(&persist, &later, false);
        let updated = projects
            .update(
                &project.id,
                ProjectPatch {
                    status: Some(ProjectStatus::Completed),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, ProjectStatus::Completed);
        assert_eq!(updated.start_date, day(2024, 1, 1));
        assert_eq!(updated.last_updated, day(2024, 2, 10));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        let a = snippets.add(snippet("A"));
        snippets.add(snippet("B"));

        let removed = snippets.delete(&a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(snippets.len(), 1);
        assert!(snippets.get(&a.id).is_none());

        let reloaded: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        snippets.add(snippet("A"));

        assert!(snippets.delete("missing").is_none());
        assert_eq!(snippets.len(), 1);
    }

    #[test]
    fn write_failure_keeps_in_memory_change() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        persist.store().set_simulate_write_error(true);

        snippets.add(snippet("Unsaved"));
        assert_eq!(snippets.len(), 1);
        assert_eq!(persist.store().raw(SNIPPETS_KEY), None);
    }

    #[test]
    fn search_matches_title_and_tags() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        snippets.add(snippet("Binary Search"));
        snippets.add(NewSnippet {
            title: "Sort".into(),
            tags: vec!["Algorithms".into()],
            ..Default::default()
        });

        assert_eq!(snippets.search("SEARCH").len(), 1);
        assert_eq!(snippets.search("algo").len(), 1);
        assert_eq!(snippets.search("").len(), 2);
        assert!(snippets.search("python").is_empty());
    }

    #[test]
    fn resolve_accepts_unique_prefix() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, true);
        let added = snippets.add(snippet("A"));

        assert_eq!(snippets.resolve(&added.id).unwrap(), Some(added.id.clone()));
        assert_eq!(snippets.resolve("nope").unwrap(), None);
        assert_eq!(snippets.resolve("2").unwrap(), Some("2".to_string()));
        assert_eq!(
            snippets.resolve(&added.id[..MIN_PREFIX_LEN + 2]).unwrap(),
            Some(added.id.clone())
        );
    }

    #[test]
    fn short_unknown_id_is_not_a_prefix() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        let added = snippets.add(snippet("A"));

        // Generated ids start with the timestamp's leading digit
        let first = &added.id[..1];
        assert_eq!(snippets.resolve(first).unwrap(), None);
        assert_eq!(snippets.resolve(&added.id[..MIN_PREFIX_LEN - 1]).unwrap(), None);
        assert_eq!(snippets.resolve("").unwrap(), None);
    }

    #[test]
    fn resolve_rejects_ambiguous_prefix() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(day(2024, 6, 1));
        let mut snippets: Collection<_, Snippet> = Collection::load(&persist, &clock, false);
        snippets.add(snippet("A"));
        snippets.add(snippet("B"));

        // Both ids share the same millisecond timestamp prefix under a fixed clock
        let prefix = &snippets.items()[0].id[..MIN_PREFIX_LEN];
        assert!(snippets.resolve(prefix).is_err());
    }
}
