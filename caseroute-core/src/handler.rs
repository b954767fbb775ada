//! The terminal endpoint of a dispatched call.
//!
//! A `Handler` is one registered implementation of a dispatchable method.
//! The registry treats it as an opaque value: it is selected by discriminant,
//! invoked with the original call's pieces, and its output is handed back to
//! the caller without inspection.

/// One registered implementation of a dispatchable method.
///
/// Type parameters mirror the shape of a dispatched call:
///
/// - `R` - the receiver, the instance the method was invoked on
/// - `V` - the positional argument type; the first positional argument is
///   the subject the discriminant was extracted from
/// - `W` - the keyword payload, forwarded untouched
///
/// `rest` holds the positional arguments after the subject, in call order.
///
/// A blanket implementation covers plain closures, so most handlers are
/// written inline at registration time rather than as named types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle dispatched calls for receiver `{R}`",
    label = "missing `Handler` implementation",
    note = "Handlers are callables of shape `Fn(&R, &V, &[V], &W) -> Output`."
)]
pub trait Handler<R, V, W>: Send + Sync {
    /// The handler's result type, returned to the dispatch caller verbatim.
    type Output;

    /// Executes the handler logic.
    fn call(&self, receiver: &R, subject: &V, rest: &[V], kwargs: &W) -> Self::Output;
}

// Blanket impl for closures
impl<F, R, V, W, O> Handler<R, V, W> for F
where
    F: Fn(&R, &V, &[V], &W) -> O + Send + Sync,
{
    type Output = O;

    fn call(&self, receiver: &R, subject: &V, rest: &[V], kwargs: &W) -> O {
        (self)(receiver, subject, rest, kwargs)
    }
}

impl<'a, R, V, W, O> core::fmt::Debug for dyn Handler<R, V, W, Output = O> + 'a {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("<handler>")
    }
}

/// A boxed handler, as stored inside a registry's case table.
pub type BoxHandler<R, V, W, O> = Box<dyn Handler<R, V, W, Output = O>>;
