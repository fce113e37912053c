use crate::commands::{CmdMessage, CmdResult, Ctx};
use crate::error::Result;
use crate::seed::Seeded;
use crate::store::KeyValueStore;

/// All records in stored order, or those matching `search` if given.
pub fn run<S: KeyValueStore, T: Seeded>(
    ctx: &Ctx<'_, S>,
    search: Option<&str>,
) -> Result<CmdResult<T>> {
    let collection = ctx.collection::<T>();
    let records: Vec<T> = match search {
        Some(term) => collection.search(term).into_iter().cloned().collect(),
        None => collection.items().to_vec(),
    };

    let mut result = CmdResult::default();
    if records.is_empty() {
        let message = match search {
            Some(term) => format!("No {} records match '{}'", T::NOUN.to_lowercase(), term),
            None => format!("No {} records yet", T::NOUN.to_lowercase()),
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::{LearningEntry, NewLearningEntry, NewSnippet, Project, Snippet};
    use crate::test_utils::TestEnv;

    #[test]
    fn lists_in_insertion_order() {
        let env = TestEnv::new();
        for title in ["first", "second", "third"] {
            add::run::<_, Snippet>(
                &env.ctx(),
                NewSnippet {
                    title: title.into(),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let result = run::<_, Snippet>(&env.ctx(), None).unwrap();
        let titles: Vec<&str> = result.records.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn lists_seed_data_on_first_run() {
        let env = TestEnv::new().with_seed();
        let result = run::<_, Project>(&env.ctx(), None).unwrap();
        assert_eq!(result.records, Project::seed());
    }

    #[test]
    fn search_filters_learning_entries_by_category() {
        let env = TestEnv::new();
        for (title, category) in [("Closures", "Rust"), ("Flexbox", "CSS")] {
            add::run::<_, LearningEntry>(
                &env.ctx(),
                NewLearningEntry {
                    title: title.into(),
                    category: category.into(),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let result = run::<_, LearningEntry>(&env.ctx(), Some("css")).unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].title, "Flexbox");
    }

    #[test]
    fn empty_result_carries_info_message() {
        let env = TestEnv::new();
        let result = run::<_, Snippet>(&env.ctx(), Some("zzz")).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("match 'zzz'"));
    }
}
