//! Binding a registry to a receiver.
//!
//! In a language with attribute-access interception, accessing a
//! dispatchable method through an instance would yield a closure over that
//! instance. [`Bound`] is the explicit equivalent: a cheap pair of borrows
//! produced by [`Registry::bind`] that carries the receiver into each call.

use std::fmt;
use std::hash::Hash;

use caseroute_core::DispatchError;

use crate::registry::Registry;

/// A registry bound to one receiver: the callable produced by a method
/// access.
///
/// `Bound` is two references, so it is `Copy` and is meant to be produced
/// per call site rather than stored.
pub struct Bound<'a, R, V, K, W, O> {
    registry: &'a Registry<R, V, K, W, O>,
    receiver: &'a R,
}

impl<'a, R, V, K, W, O> Bound<'a, R, V, K, W, O> {
    pub(crate) fn new(registry: &'a Registry<R, V, K, W, O>, receiver: &'a R) -> Self {
        Self { registry, receiver }
    }

    /// The registry this binding dispatches through.
    pub fn registry(&self) -> &'a Registry<R, V, K, W, O> {
        self.registry
    }
}

impl<R, V, K, W, O> Bound<'_, R, V, K, W, O>
where
    K: Hash + Eq + fmt::Debug,
{
    /// Dispatch a call on the bound receiver.
    ///
    /// `args[0]` is the subject the discriminant is extracted from; the
    /// remaining positional arguments and `kwargs` are forwarded to the
    /// resolved handler untouched, and its result is returned verbatim.
    ///
    /// Fails with [`DispatchError::MissingSubject`] when `args` is empty,
    /// whatever `kwargs` holds; resolution failures propagate unchanged.
    pub fn call(&self, args: &[V], kwargs: &W) -> Result<O, DispatchError> {
        self.registry.dispatch(self.receiver, args, kwargs)
    }
}

impl<R, V, K, W, O> Clone for Bound<'_, R, V, K, W, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, V, K, W, O> Copy for Bound<'_, R, V, K, W, O> {}

#[cfg(test)]
mod tests {
    use crate::Registry;
    use std::collections::HashMap;

    type Subject = HashMap<String, u8>;

    struct Counter {
        base: u8,
    }

    #[test]
    fn bound_call_sees_the_receiver() {
        let registry: Registry<Counter, Subject, u8, (), u8> = Registry::builder()
            .key("n")
            .case(1, |c: &Counter, _: &Subject, _: &[Subject], _: &()| {
                c.base + 1
            })
            .unwrap()
            .build()
            .unwrap();

        let first = Counter { base: 10 };
        let second = Counter { base: 20 };
        let subject = Subject::from([("n".to_string(), 1)]);

        assert_eq!(
            registry.bind(&first).call(&[subject.clone()], &()).unwrap(),
            11
        );
        assert_eq!(registry.bind(&second).call(&[subject], &()).unwrap(), 21);
    }
}
