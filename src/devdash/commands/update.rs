use crate::commands::{CmdMessage, CmdResult, Ctx};
use crate::error::Result;
use crate::seed::Seeded;
use crate::store::KeyValueStore;

/// Merge `patch` into the record identified by `id` (or a unique prefix).
///
/// An unknown id leaves the collection untouched and yields a warning.
pub fn run<S: KeyValueStore, T: Seeded>(
    ctx: &Ctx<'_, S>,
    id: &str,
    patch: T::Patch,
) -> Result<CmdResult<T>> {
    let mut collection = ctx.collection::<T>();
    let mut result = CmdResult::default();

    let Some(resolved) = collection.resolve(id.trim())? else {
        result.add_message(CmdMessage::warning(format!(
            "No {} with id {}",
            T::NOUN.to_lowercase(),
            id
        )));
        return Ok(result);
    };

    if let Some(updated) = collection.update(&resolved, patch) {
        result.add_message(CmdMessage::success(format!(
            "{} updated ({}): {}",
            T::NOUN,
            updated.id(),
            updated.title()
        )));
        result.records.push(updated);
    }
    Ok(result)
}
