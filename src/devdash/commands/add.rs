use crate::commands::{CmdMessage, CmdResult, Ctx};
use crate::error::{DashError, Result};
use crate::seed::Seeded;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore, T: Seeded>(
    ctx: &Ctx<'_, S>,
    draft: T::Draft,
) -> Result<CmdResult<T>> {
    if T::draft_title(&draft).trim().is_empty() {
        return Err(DashError::Api("Title cannot be empty".into()));
    }
    let mut collection = ctx.collection::<T>();
    let item = collection.add(draft);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} added ({}): {}",
        T::NOUN,
        item.id(),
        item.title()
    )));
    Ok(result.with_records(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::DevDashConfig;
    use crate::model::{LearningEntry, NewLearningEntry, NewSnippet, Snippet};
    use crate::persist::Persistence;
    use crate::store::memory::MemoryStore;
    use crate::store::SNIPPETS_KEY;
    use chrono::NaiveDate;

    fn config() -> DevDashConfig {
        DevDashConfig {
            seed_on_first_run: false,
            ..Default::default()
        }
    }

    #[test]
    fn adds_record_with_todays_date() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        let config = config();
        let ctx = Ctx {
            persist: &persist,
            clock: &clock,
            config: &config,
        };

        let result = run::<_, LearningEntry>(
            &ctx,
            NewLearningEntry {
                title: "Traits".into(),
                category: "Rust".into(),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(
            result.records[0].date,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
        );
        assert!(result.messages[0].content.contains("Learning entry added"));
    }

    #[test]
    fn empty_title_is_rejected_and_not_stored() {
        let persist = Persistence::new(MemoryStore::new());
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        let config = config();
        let ctx = Ctx {
            persist: &persist,
            clock: &clock,
            config: &config,
        };

        let result = run::<_, Snippet>(
            &ctx,
            NewSnippet {
                title: "  ".into(),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(DashError::Api(_))));
        assert_eq!(persist.store().raw(SNIPPETS_KEY), None);
    }
}
