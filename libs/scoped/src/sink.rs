//! Destinations for [`ScopedId::try_parse`](crate::ScopedId::try_parse).

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::ScopedId;

/// Somewhere a successfully parsed identifier can be stored under a key.
pub trait ParseSink {
    /// Key the identifier is stored under.
    type Key;

    /// Stores `sid` under `key`, replacing any previous value.
    fn store(&mut self, key: Self::Key, sid: ScopedId);
}

impl<K, S> ParseSink for HashMap<K, ScopedId, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;

    fn store(&mut self, key: K, sid: ScopedId) {
        self.insert(key, sid);
    }
}

impl<K: Ord> ParseSink for BTreeMap<K, ScopedId> {
    type Key = K;

    fn store(&mut self, key: K, sid: ScopedId) {
        self.insert(key, sid);
    }
}

/// A single optional slot, e.g. a struct field.
impl ParseSink for Option<ScopedId> {
    type Key = ();

    fn store(&mut self, _key: (), sid: ScopedId) {
        *self = Some(sid);
    }
}
