use crate::collection::Collection;
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Entity;
use crate::store::KeyValueStore;

/// Resolve user supplied ids (or unique prefixes) against a collection.
///
/// Ids that match nothing are reported as warnings and skipped. Duplicates
/// collapse to their first occurrence.
pub fn resolve_ids<S: KeyValueStore, T: Entity, I: AsRef<str>>(
    collection: &Collection<'_, S, T>,
    inputs: &[I],
    messages: &mut Vec<CmdMessage>,
) -> Result<Vec<String>> {
    let mut resolved: Vec<String> = Vec::new();
    for input in inputs {
        let input = input.as_ref().trim();
        match collection.resolve(input)? {
            Some(id) => {
                if !resolved.contains(&id) {
                    resolved.push(id);
                }
            }
            None => messages.push(CmdMessage::warning(format!(
                "No {} with id {}",
                T::NOUN.to_lowercase(),
                input
            ))),
        }
    }
    Ok(resolved)
}
