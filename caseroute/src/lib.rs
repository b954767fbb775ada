//! # caseroute - Value-Dispatch Registries
//!
//! `caseroute` replaces a chain of conditional branches with a declarative
//! table of (discriminant → handler) pairs, resolved once per call. A method
//! declares several alternative implementations, each keyed by a value; each
//! call is routed to the implementation matching a value extracted from the
//! call's first positional argument (the *subject*).
//!
//! ## Quick Start
//!
//! ```rust
//! use caseroute::Registry;
//! use std::collections::HashMap;
//!
//! struct Service;
//!
//! let registry: Registry<Service, HashMap<String, String>, String, (), &'static str> =
//!     Registry::builder()
//!         .key("kind")
//!         .case("create".to_string(), |_: &Service, _: &HashMap<String, String>, _: &[_], _: &()| {
//!             "created"
//!         })
//!         .unwrap()
//!         .fallback(|_: &Service, _: &HashMap<String, String>, _: &[_], _: &()| "ignored")
//!         .build()
//!         .unwrap();
//!
//! let service = Service;
//! let subject = HashMap::from([("kind".to_string(), "create".to_string())]);
//! let out = registry.bind(&service).call(&[subject], &()).unwrap();
//! assert_eq!(out, "created");
//! ```
//!
//! ## Freezing
//!
//! Registration happens on [`RegistryBuilder`]; the built [`Registry`]
//! exposes no mutation, so a fully-populated registry can be shared freely
//! (a `static`, a `OnceLock`, a field shared by all instances of a type) and
//! dispatched against concurrently without locking.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use caseroute_core::{
    // Error types
    BuildError,
    CaserouteError,
    DispatchError,
    // Handler
    BoxHandler,
    Handler,
    // Subject probing
    KeyedSubject,
    // Selection strategy
    Select,
};

mod bind;
mod builder;
mod registry;
mod select;

pub use bind::Bound;
pub use builder::RegistryBuilder;
pub use registry::Registry;
pub use select::{FieldSelect, KeySelect};
