//! Key-probeable subject types.

use std::collections::{BTreeMap, HashMap};

/// A subject that can be probed for a discriminant by key, the way a
/// mapping is.
///
/// This is the seam behind the built-in key-lookup selection strategy:
/// any type implementing `KeyedSubject<K>` can act as the first positional
/// argument of a key-mode dispatch. Implementations are provided for the
/// standard map types keyed by strings, and for `serde_json::Value` under
/// the `json` feature.
///
/// Extraction clones the discriminant out of the subject, so `K` is meant
/// to be a small tag type (string, integer, unit-variant enum).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a key-mode dispatch subject",
    label = "must be probeable by key",
    note = "Implement `KeyedSubject<{K}>` or dispatch on a field selector instead."
)]
pub trait KeyedSubject<K> {
    /// Whether the subject has an entry under `name`.
    fn contains_key(&self, name: &str) -> bool;

    /// The discriminant stored under `name`, if any.
    fn get_key(&self, name: &str) -> Option<K>;
}

impl<K: Clone> KeyedSubject<K> for HashMap<String, K> {
    fn contains_key(&self, name: &str) -> bool {
        HashMap::contains_key(self, name)
    }

    fn get_key(&self, name: &str) -> Option<K> {
        self.get(name).cloned()
    }
}

impl<'a, K: Clone> KeyedSubject<K> for HashMap<&'a str, K> {
    fn contains_key(&self, name: &str) -> bool {
        HashMap::contains_key(self, name)
    }

    fn get_key(&self, name: &str) -> Option<K> {
        self.get(name).cloned()
    }
}

impl<K: Clone> KeyedSubject<K> for BTreeMap<String, K> {
    fn contains_key(&self, name: &str) -> bool {
        BTreeMap::contains_key(self, name)
    }

    fn get_key(&self, name: &str) -> Option<K> {
        self.get(name).cloned()
    }
}

/// JSON objects dispatch on a string-valued field. A field holding a
/// non-string value is treated as absent by `get_key`, so it surfaces as a
/// missing discriminant rather than a silent mismatch.
#[cfg(feature = "json")]
impl KeyedSubject<String> for serde_json::Value {
    fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn get_key(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    }
}
