//! Discriminant selection strategy.
//!
//! A `Select` implementation owns everything a registry needs to know about
//! *where* the discriminant lives: its name, whether a given subject exposes
//! it, and how to read it out. The registry itself only ever compares the
//! extracted value against its case table; it never looks inside a subject
//! directly.
//!
//! Splitting `contains` from `extract` gives dispatch two distinct failure
//! modes: a subject that lacks the discriminant entirely is reported
//! differently from a subject whose discriminant value simply has no
//! registered handler.

/// A strategy for extracting a discriminant value from a subject.
///
/// `caseroute` ships two implementations (key lookup for mapping-like
/// subjects, and a named field accessor), but any subject shape can be
/// supported by implementing this trait directly.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot select a discriminant of type `{K}` from subjects of type `{V}`",
    label = "missing `Select` implementation",
    note = "Implement `Select<{V}, {K}>` or use one of the built-in selectors."
)]
pub trait Select<V, K>: Send + Sync {
    /// The name of the discriminant this selector reads, fixed at
    /// construction. Used in error reporting.
    fn name(&self) -> &str;

    /// Whether the subject exposes the discriminant at all.
    fn contains(&self, subject: &V) -> bool;

    /// Read the discriminant value out of the subject.
    ///
    /// Only consulted after [`contains`](Select::contains) succeeds; a
    /// `None` at that point is still reported as a missing discriminant.
    fn extract(&self, subject: &V) -> Option<K>;
}
