//! # Persistence
//!
//! [`Persistence`] wraps a [`KeyValueStore`] with the lenient contract the
//! rest of devdash relies on:
//!
//! - [`Persistence::load`] never fails. A missing key, an unreadable store, a
//!   payload that is not JSON, or JSON that does not deserialize into the
//!   requested collection type all yield the supplied default.
//! - [`Persistence::save`] never fails. A write error is logged and dropped;
//!   in-memory state may then run ahead of what is on disk until the next
//!   successful save of the same key.
//!
//! Failures are reported through `tracing` at `warn` level so they are
//! visible on stderr without interrupting the caller.

use crate::clock::Clock;
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

const ID_RANDOM_LEN: usize = 9;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub struct Persistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the collection stored under `key`, or `default` if there is no
    /// usable value.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: Vec<T>) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!(key, error = %e, "failed to read collection, using defaults");
                return default;
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key, error = %e, "stored collection is malformed, using defaults");
                default
            }
        }
    }

    /// Persist the full collection under `key`, replacing what was there.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize collection");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &raw) {
            warn!(key, error = %e, "failed to save collection");
        }
    }

    /// Drop whatever is stored under `key`.
    pub fn clear(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(key, error = %e, "failed to clear collection");
        }
    }
}

/// Millisecond timestamp followed by random lowercase alphanumerics.
pub fn generate_id(clock: &dyn Clock) -> String {
    let millis = clock.now().and_utc().timestamp_millis();
    let mut bits = Uuid::new_v4().as_u128();
    let mut id = millis.to_string();
    for _ in 0..ID_RANDOM_LEN {
        id.push(ID_ALPHABET[(bits % 36) as usize] as char);
        bits /= 36;
    }
    id
}
