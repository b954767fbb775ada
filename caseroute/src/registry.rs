//! The case table and its resolution algorithm.
//!
//! A [`Registry`] owns the mapping from discriminant values to handlers and
//! the strategy for extracting a discriminant from a subject. It is produced
//! by [`RegistryBuilder`](crate::RegistryBuilder), after which it is
//! read-only: dispatch performs pure lookups and a direct call, so a built
//! registry can serve concurrent callers without locking.
//!
//! # Resolution
//!
//! [`Registry::resolve`] proceeds in two steps that fail differently:
//!
//! 1. The subject is probed for the discriminant at all. A subject that
//!    lacks it yields [`DispatchError::MissingDiscriminant`]: a malformed
//!    subject, regardless of what the registry contains.
//! 2. The extracted value is looked up in the case table, then in the
//!    fallback slot. No match in either yields
//!    [`DispatchError::UnregisteredHandler`]: a well-formed subject whose
//!    case simply isn't handled.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use caseroute_core::{BoxHandler, DispatchError, Handler, Select};

use crate::bind::Bound;
use crate::builder::RegistryBuilder;

/// A key in the case table.
///
/// The fallback handler lives under a dedicated variant rather than a
/// reserved in-band value, so no user-supplied discriminant can collide
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum CaseKey<K> {
    /// An exact discriminant value.
    Value(K),
    /// The fallback slot, consulted only when no exact value matches.
    Default,
}

impl<K: fmt::Debug> CaseKey<K> {
    /// Rendering used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            CaseKey::Value(value) => format!("{value:?}"),
            CaseKey::Default => "<default>".to_owned(),
        }
    }
}

/// A frozen table of (discriminant → handler) cases plus the strategy for
/// extracting a discriminant from a subject.
///
/// Type parameters:
///
/// - `R` - the receiver the dispatched method belongs to
/// - `V` - the positional argument type; `args[0]` is the subject
/// - `K` - the discriminant value type (`Hash + Eq + Debug`)
/// - `W` - the keyword payload, passed through to handlers untouched
/// - `O` - the handlers' common output type
pub struct Registry<R, V, K, W, O> {
    selector: Box<dyn Select<V, K>>,
    cases: HashMap<CaseKey<K>, BoxHandler<R, V, W, O>>,
}

impl<R, V, K, W, O> Registry<R, V, K, W, O>
where
    K: Hash + Eq + fmt::Debug,
{
    pub(crate) fn from_parts(
        selector: Box<dyn Select<V, K>>,
        cases: HashMap<CaseKey<K>, BoxHandler<R, V, W, O>>,
    ) -> Self {
        Self { selector, cases }
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder<R, V, K, W, O> {
        RegistryBuilder::new()
    }

    /// The name of the discriminant this registry dispatches on.
    pub fn discriminant(&self) -> &str {
        self.selector.name()
    }

    /// The number of registered cases, the fallback included.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the registry holds no cases at all.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Whether a fallback handler is registered.
    pub fn has_fallback(&self) -> bool {
        self.cases.contains_key(&CaseKey::Default)
    }

    /// Find the handler for `subject`'s discriminant.
    ///
    /// Fails with [`DispatchError::MissingDiscriminant`] when the subject
    /// does not expose the discriminant, and with
    /// [`DispatchError::UnregisteredHandler`] when the extracted value has
    /// no case and no fallback exists.
    pub fn resolve(&self, subject: &V) -> Result<&dyn Handler<R, V, W, Output = O>, DispatchError> {
        if !self.selector.contains(subject) {
            return Err(self.missing_discriminant());
        }
        let Some(value) = self.selector.extract(subject) else {
            return Err(self.missing_discriminant());
        };

        let case = CaseKey::Value(value);
        if let Some(handler) = self
            .cases
            .get(&case)
            .or_else(|| self.cases.get(&CaseKey::Default))
        {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                discriminant = self.selector.name(),
                case = %case.describe(),
                "resolved dispatch case"
            );
            return Ok(handler.as_ref());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            discriminant = self.selector.name(),
            case = %case.describe(),
            "no handler registered for dispatch case"
        );
        Err(DispatchError::UnregisteredHandler(case.describe()))
    }

    /// Dispatch a call directly, without an intermediate binding.
    ///
    /// `args[0]` is the subject; the rest are forwarded to the handler in
    /// order, along with `kwargs`. The handler's result is returned
    /// verbatim.
    pub fn dispatch(&self, receiver: &R, args: &[V], kwargs: &W) -> Result<O, DispatchError> {
        let Some((subject, rest)) = args.split_first() else {
            return Err(DispatchError::MissingSubject);
        };
        let handler = self.resolve(subject)?;
        Ok(handler.call(receiver, subject, rest, kwargs))
    }

    /// Bind this registry to a receiver, producing the callable a method
    /// access would yield.
    pub fn bind<'a>(&'a self, receiver: &'a R) -> Bound<'a, R, V, K, W, O> {
        Bound::new(self, receiver)
    }

    fn missing_discriminant(&self) -> DispatchError {
        DispatchError::MissingDiscriminant(self.selector.name().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{CaseKey, Registry};
    use caseroute_core::DispatchError;
    use std::collections::HashMap;

    type Subject = HashMap<String, String>;

    fn subject(kind: &str) -> Subject {
        HashMap::from([("kind".to_string(), kind.to_string())])
    }

    fn sample() -> Registry<(), Subject, String, (), &'static str> {
        Registry::builder()
            .key("kind")
            .case(
                "create".to_string(),
                |_: &(), _: &Subject, _: &[Subject], _: &()| "created",
            )
            .unwrap()
            .case(
                "delete".to_string(),
                |_: &(), _: &Subject, _: &[Subject], _: &()| "deleted",
            )
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn resolves_exact_case() {
        let registry = sample();
        let handler = registry.resolve(&subject("delete")).unwrap();
        assert_eq!(handler.call(&(), &subject("delete"), &[], &()), "deleted");
    }

    #[test]
    fn missing_discriminant_names_the_key() {
        let registry = sample();
        let bare = Subject::new();
        let err = registry.resolve(&bare).unwrap_err();
        assert!(matches!(err, DispatchError::MissingDiscriminant(name) if name == "kind"));
    }

    #[test]
    fn unregistered_value_carries_the_value() {
        let registry = sample();
        let err = registry.resolve(&subject("update")).unwrap_err();
        assert!(matches!(err, DispatchError::UnregisteredHandler(v) if v.contains("update")));
    }

    #[test]
    fn empty_args_is_a_missing_subject() {
        let registry = sample();
        let err = registry.dispatch(&(), &[], &()).unwrap_err();
        assert!(matches!(err, DispatchError::MissingSubject));
    }

    #[test]
    fn case_key_describe() {
        assert_eq!(CaseKey::Value("a").describe(), "\"a\"");
        assert_eq!(CaseKey::<&str>::Default.describe(), "<default>");
    }
}
