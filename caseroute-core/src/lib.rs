//! # caseroute-core
//!
//! Core traits for the caseroute value-dispatch registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that defines handlers or custom selection strategies without
//! needing the full `caseroute` implementation.
//!
//! # Concepts
//!
//! A dispatchable method declares several alternative implementations, each
//! keyed by a *discriminant* value. At call time, the discriminant is
//! extracted from the call's first positional argument (the *subject*) and
//! the matching implementation is invoked. This crate defines the seams of
//! that mechanism:
//!
//! - [`Handler`] - one registered implementation. Receives the receiver,
//!   the subject, the remaining positional arguments, and the keyword
//!   payload; its result is returned to the caller verbatim.
//! - [`Select`] - the discriminant-extraction strategy: knows the
//!   discriminant's name, whether a subject exposes it, and how to read it.
//! - [`KeyedSubject`] - implemented by subject types that can be probed by
//!   key, enabling the built-in key-lookup strategy.
//!
//! # Error Types
//!
//! - [`CaserouteError`] - Top-level error type
//! - [`BuildError`] - Registry construction errors
//! - [`DispatchError`] - Call-time dispatch errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod select;
mod subject;

// Re-exports
pub use error::{BuildError, CaserouteError, DispatchError};
pub use handler::{BoxHandler, Handler};
pub use select::Select;
pub use subject::KeyedSubject;
