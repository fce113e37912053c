use crate::commands::helpers::resolve_ids;
use crate::commands::{CmdResult, Ctx};
use crate::error::Result;
use crate::seed::Seeded;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore, T: Seeded, I: AsRef<str>>(
    ctx: &Ctx<'_, S>,
    ids: &[I],
) -> Result<CmdResult<T>> {
    let collection = ctx.collection::<T>();
    let mut result = CmdResult::default();
    let resolved = resolve_ids(&collection, ids, &mut result.messages)?;

    let records = resolved
        .iter()
        .filter_map(|id| collection.get(id).cloned())
        .collect();
    Ok(result.with_records(records))
}
