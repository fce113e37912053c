use crate::commands::helpers::resolve_ids;
use crate::commands::{CmdMessage, CmdResult, Ctx};
use crate::error::Result;
use crate::seed::Seeded;
use crate::store::KeyValueStore;

/// Permanently remove the records with the given ids. There is no undo.
pub fn run<S: KeyValueStore, T: Seeded, I: AsRef<str>>(
    ctx: &Ctx<'_, S>,
    ids: &[I],
) -> Result<CmdResult<T>> {
    let mut collection = ctx.collection::<T>();
    let mut result = CmdResult::default();
    let resolved = resolve_ids(&collection, ids, &mut result.messages)?;

    for id in resolved {
        if let Some(removed) = collection.delete(&id) {
            result.add_message(CmdMessage::success(format!(
                "{} deleted ({}): {}",
                T::NOUN,
                removed.id(),
                removed.title()
            )));
            result.records.push(removed);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list, MessageLevel};
    use crate::model::{LearningEntry, NewLearningEntry};
    use crate::test_utils::TestEnv;

    fn add_entry(env: &TestEnv, title: &str) -> LearningEntry {
        add::run::<_, LearningEntry>(
            &env.ctx(),
            NewLearningEntry {
                title: title.into(),
                ..Default::default()
            },
        )
        .unwrap()
        .records
        .remove(0)
    }

    #[test]
    fn removes_exactly_one_record() {
        let env = TestEnv::new();
        let a = add_entry(&env, "A");
        let b = add_entry(&env, "B");

        let result = run::<_, LearningEntry, _>(&env.ctx(), &[a.id.as_str()]).unwrap();
        assert_eq!(result.records, vec![a]);

        let remaining = list::run::<_, LearningEntry>(&env.ctx(), None)
            .unwrap()
            .records;
        assert_eq!(remaining, vec![b]);
    }

    #[test]
    fn deleting_unknown_id_is_noop() {
        let env = TestEnv::new();
        add_entry(&env, "A");

        let result = run::<_, LearningEntry, _>(&env.ctx(), &["nope"]).unwrap();
        assert!(result.records.is_empty());

        let remaining = list::run::<_, LearningEntry>(&env.ctx(), None)
            .unwrap()
            .records;
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn deletes_several_records() {
        let env = TestEnv::new();
        let a = add_entry(&env, "A");
        let b = add_entry(&env, "B");
        add_entry(&env, "C");

        let result =
            run::<_, LearningEntry, _>(&env.ctx(), &[a.id.as_str(), b.id.as_str()]).unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.messages.len(), 2);

        let remaining = list::run::<_, LearningEntry>(&env.ctx(), None)
            .unwrap()
            .records;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "C");
    }

    #[test]
    fn deleting_an_already_deleted_seed_id_changes_nothing() {
        let env = TestEnv::new().with_seed();
        add_entry(&env, "Mine");
        let count = || {
            list::run::<_, LearningEntry>(&env.ctx(), None)
                .unwrap()
                .records
                .len()
        };

        run::<_, LearningEntry, _>(&env.ctx(), &["1"]).unwrap();
        let before = count();

        let result = run::<_, LearningEntry, _>(&env.ctx(), &["1"]).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(count(), before);
    }
}
