//! Built-in selection strategies.
//!
//! The two strategies differ only in how the discriminant is located;
//! everything else sits behind the shared [`Select`] interface, and the
//! registry and binder logic is identical for both.

use std::fmt;

use caseroute_core::{KeyedSubject, Select};

/// Key-mode selection: the discriminant is looked up in the subject by key.
///
/// Works for any subject implementing [`KeyedSubject`].
pub struct KeySelect {
    name: String,
}

impl KeySelect {
    /// A selector reading the entry stored under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Debug for KeySelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySelect").field("name", &self.name).finish()
    }
}

impl<V, K> Select<V, K> for KeySelect
where
    V: KeyedSubject<K>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, subject: &V) -> bool {
        subject.contains_key(&self.name)
    }

    fn extract(&self, subject: &V) -> Option<K> {
        subject.get_key(&self.name)
    }
}

/// Attribute-mode selection: the discriminant is a named field read by an
/// accessor closure.
///
/// Field presence is static in Rust, so optionality lives in the accessor:
/// returning `None` marks the subject as lacking the field (an `Option`
/// field, a variant without the field, and so on).
pub struct FieldSelect<V, K> {
    name: String,
    get: Box<dyn Fn(&V) -> Option<K> + Send + Sync>,
}

impl<V, K> FieldSelect<V, K> {
    /// A selector reading the field called `name` through `get`.
    pub fn new<F>(name: impl Into<String>, get: F) -> Self
    where
        F: Fn(&V) -> Option<K> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            get: Box::new(get),
        }
    }
}

impl<V, K> fmt::Debug for FieldSelect<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSelect")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<V, K> Select<V, K> for FieldSelect<V, K> {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, subject: &V) -> bool {
        (self.get)(subject).is_some()
    }

    fn extract(&self, subject: &V) -> Option<K> {
        (self.get)(subject)
    }
}
