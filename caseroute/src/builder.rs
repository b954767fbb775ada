//! Registration-time construction of a registry.
//!
//! The builder is the only mutable phase of a registry's life. Cases are
//! added one at a time, duplicates rejected as they arrive, and `build`
//! checks that exactly one selection strategy was configured before handing
//! out the frozen [`Registry`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use caseroute_core::{BoxHandler, BuildError, Handler, KeyedSubject, Select};

use crate::registry::{CaseKey, Registry};
use crate::select::{FieldSelect, KeySelect};

/// Builder for [`Registry`].
///
/// Registration calls consume and return the builder, so a whole dispatch
/// table reads as one declarative chain:
///
/// ```rust
/// # use caseroute::Registry;
/// # use std::collections::HashMap;
/// # type Subject = HashMap<String, String>;
/// let registry: Registry<(), Subject, String, (), u32> = Registry::builder()
///     .key("kind")
///     .case("one".to_string(), |_: &(), _: &Subject, _: &[_], _: &()| 1)?
///     .case("two".to_string(), |_: &(), _: &Subject, _: &[_], _: &()| 2)?
///     .fallback(|_: &(), _: &Subject, _: &[_], _: &()| 0)
///     .build()?;
/// # Ok::<(), caseroute::BuildError>(())
/// ```
pub struct RegistryBuilder<R, V, K, W, O> {
    selector: Option<Box<dyn Select<V, K>>>,
    selector_conflict: bool,
    cases: HashMap<CaseKey<K>, BoxHandler<R, V, W, O>>,
}

impl<R, V, K, W, O> fmt::Debug for RegistryBuilder<R, V, K, W, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("selector", &self.selector.is_some())
            .field("selector_conflict", &self.selector_conflict)
            .field("cases", &self.cases.len())
            .finish()
    }
}

impl<R, V, K, W, O> Default for RegistryBuilder<R, V, K, W, O> {
    fn default() -> Self {
        Self {
            selector: None,
            selector_conflict: false,
            cases: HashMap::new(),
        }
    }
}

impl<R, V, K, W, O> RegistryBuilder<R, V, K, W, O>
where
    K: Hash + Eq + fmt::Debug,
{
    /// Create an empty builder with no strategy and no cases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch on a key looked up in the subject (key mode).
    ///
    /// The subject type must be probeable as a mapping; see
    /// [`KeyedSubject`].
    pub fn key(mut self, name: impl Into<String>) -> Self
    where
        V: KeyedSubject<K> + 'static,
        K: 'static,
    {
        self.set_selector(Box::new(KeySelect::new(name)));
        self
    }

    /// Dispatch on a named field read by `get` (attribute mode).
    ///
    /// `get` returning `None` means the subject lacks the field.
    pub fn field<F>(mut self, name: impl Into<String>, get: F) -> Self
    where
        F: Fn(&V) -> Option<K> + Send + Sync + 'static,
        V: 'static,
        K: 'static,
    {
        self.set_selector(Box::new(FieldSelect::new(name, get)));
        self
    }

    /// Dispatch using a custom selection strategy.
    pub fn selector<S>(mut self, selector: S) -> Self
    where
        S: Select<V, K> + 'static,
    {
        self.set_selector(Box::new(selector));
        self
    }

    /// Register a handler for an exact discriminant value.
    ///
    /// Fails with [`BuildError::DuplicateHandler`] if `value` is already
    /// registered on this builder. Independent builders never conflict.
    pub fn case<H>(mut self, value: K, handler: H) -> Result<Self, BuildError>
    where
        H: Handler<R, V, W, Output = O> + 'static,
    {
        self.insert_case(CaseKey::Value(value), Box::new(handler))?;
        #[cfg(feature = "tracing")]
        tracing::trace!(cases = self.cases.len(), "registered dispatch case");
        Ok(self)
    }

    /// Register the fallback handler, invoked when no exact value matches.
    ///
    /// At most one fallback exists; a second call overwrites the first.
    pub fn fallback<H>(mut self, handler: H) -> Self
    where
        H: Handler<R, V, W, Output = O> + 'static,
    {
        self.cases.insert(CaseKey::Default, Box::new(handler));
        self
    }

    /// Freeze the builder into a [`Registry`].
    ///
    /// Fails with [`BuildError::SelectorRequired`] when no strategy was
    /// configured, and with [`BuildError::SelectorConflict`] when more than
    /// one was.
    pub fn build(self) -> Result<Registry<R, V, K, W, O>, BuildError> {
        if self.selector_conflict {
            return Err(BuildError::SelectorConflict);
        }
        let Some(selector) = self.selector else {
            return Err(BuildError::SelectorRequired);
        };
        Ok(Registry::from_parts(selector, self.cases))
    }

    fn set_selector(&mut self, selector: Box<dyn Select<V, K>>) {
        if self.selector.is_some() {
            self.selector_conflict = true;
        }
        self.selector = Some(selector);
    }

    fn insert_case(
        &mut self,
        case: CaseKey<K>,
        handler: BoxHandler<R, V, W, O>,
    ) -> Result<(), BuildError> {
        match self.cases.entry(case) {
            Entry::Occupied(entry) => Err(BuildError::DuplicateHandler(entry.key().describe())),
            Entry::Vacant(slot) => {
                slot.insert(handler);
                Ok(())
            }
        }
    }
}
