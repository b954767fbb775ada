//! Error types for caseroute.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CaserouteError`] - Top-level error type for all caseroute operations
//! - [`BuildError`] - Errors while constructing a registry
//! - [`DispatchError`] - Errors while dispatching a call
//!
//! Every error here is terminal: it signals a programmer or caller mistake,
//! not a transient condition, so there is no retry or partial-success path.
//! Errors raised inside a handler body are not represented here; they belong
//! to the handler's own output type and pass through the dispatch layer
//! untouched.

use thiserror::Error;

/// Top-level error type for all caseroute operations.
#[derive(Error, Debug)]
pub enum CaserouteError {
    /// An error occurred while constructing a registry.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// An error occurred while dispatching a call.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors that can occur while a registry is being constructed.
#[derive(Error, Debug)]
pub enum BuildError {
    /// No selection strategy was configured before `build`.
    #[error("provide either a key or a field selector for matching")]
    SelectorRequired,

    /// More than one selection strategy was configured.
    #[error("key and field selectors are mutually exclusive")]
    SelectorConflict,

    /// A discriminant value was registered twice on the same registry.
    ///
    /// Carries the `Debug` rendering of the offending value.
    #[error("handler for {0} is already registered")]
    DuplicateHandler(String),
}

/// Errors that can occur at dispatch time.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The call supplied no positional arguments, so there is no subject
    /// to extract a discriminant from.
    #[error("dispatch expects at least one positional argument for matching")]
    MissingSubject,

    /// The subject does not expose the configured discriminant.
    ///
    /// Carries the discriminant name the registry was configured with.
    #[error("subject does not contain discriminant {0:?}")]
    MissingDiscriminant(String),

    /// The extracted discriminant value has no registered handler and the
    /// registry has no fallback.
    ///
    /// Carries the `Debug` rendering of the extracted value.
    #[error("handler for {0} is not registered")]
    UnregisteredHandler(String),
}
