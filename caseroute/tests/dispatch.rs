//! End-to-end dispatch behavior through built registries.

use caseroute::{DispatchError, KeyedSubject, Registry, Select};
use std::collections::HashMap;

type Kwargs = HashMap<String, i32>;

/// A loosely-typed positional argument, the closest Rust shape to what a
/// dynamic caller would pass: the subject is a mapping, trailing positional
/// arguments are plain strings.
#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Map(HashMap<String, String>),
    Str(&'static str),
}

impl Arg {
    fn map(entries: &[(&str, &str)]) -> Self {
        Arg::Map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn marker(&self) -> Option<&str> {
        match self {
            Arg::Map(m) => m.get("marker").map(String::as_str),
            Arg::Str(_) => None,
        }
    }
}

impl KeyedSubject<String> for Arg {
    fn contains_key(&self, name: &str) -> bool {
        matches!(self, Arg::Map(m) if m.contains_key(name))
    }

    fn get_key(&self, name: &str) -> Option<String> {
        match self {
            Arg::Map(m) => m.get(name).cloned(),
            Arg::Str(_) => None,
        }
    }
}

type Out = (bool, Vec<Arg>, Kwargs);

fn pass_through(marker: &'static str) -> impl Fn(&(), &Arg, &[Arg], &Kwargs) -> Out {
    move |_, subject, rest, kwargs| (subject.marker() == Some(marker), rest.to_vec(), kwargs.clone())
}

fn keyed() -> Registry<(), Arg, String, Kwargs, Out> {
    Registry::builder()
        .key("key")
        .case("value-1".to_string(), pass_through("value-1"))
        .unwrap()
        .case("value-2".to_string(), pass_through("value-2"))
        .unwrap()
        .case("value-3".to_string(), pass_through("value-3"))
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn routes_by_key_and_passes_arguments_through() {
    let registry = keyed();
    let receiver = ();
    let kwargs = Kwargs::from([("b".to_string(), 1)]);

    let subject = Arg::map(&[("key", "value-1"), ("marker", "value-1")]);
    let out = registry
        .bind(&receiver)
        .call(&[subject, Arg::Str("a")], &kwargs)
        .unwrap();

    assert_eq!(out, (true, vec![Arg::Str("a")], kwargs));
}

#[test]
fn each_registered_value_routes_to_its_own_handler() {
    let registry = keyed();

    for value in ["value-1", "value-2", "value-3"] {
        let subject = Arg::map(&[("key", value), ("marker", value)]);
        let (matched, rest, kwargs) = registry
            .dispatch(&(), &[subject], &Kwargs::new())
            .unwrap();
        assert!(matched, "handler for {value} saw the wrong subject");
        assert!(rest.is_empty());
        assert!(kwargs.is_empty());
    }
}

#[test]
fn fallback_catches_any_unregistered_value() {
    let registry: Registry<(), Arg, String, Kwargs, Out> = Registry::builder()
        .key("key")
        .case("value-1".to_string(), pass_through("value-1"))
        .unwrap()
        .fallback(|_: &(), _: &Arg, rest: &[Arg], kwargs: &Kwargs| {
            (false, rest.to_vec(), kwargs.clone())
        })
        .build()
        .unwrap();

    let subject = Arg::map(&[("key", "value-9"), ("marker", "value-9")]);
    let out = registry
        .dispatch(&(), &[subject, Arg::Str("extra")], &Kwargs::new())
        .unwrap();

    assert_eq!(out, (false, vec![Arg::Str("extra")], Kwargs::new()));
}

#[test]
fn unregistered_value_without_fallback_fails() {
    let registry = keyed();
    let subject = Arg::map(&[("key", "value-4"), ("marker", "value-4")]);

    let err = registry.dispatch(&(), &[subject], &Kwargs::new()).unwrap_err();
    assert!(matches!(err, DispatchError::UnregisteredHandler(v) if v.contains("value-4")));
}

#[test]
fn no_positional_arguments_fails_whatever_the_kwargs() {
    let registry = keyed();
    let kwargs = Kwargs::from([("ignored".to_string(), 1)]);

    let err = registry.bind(&()).call(&[], &kwargs).unwrap_err();
    assert!(matches!(err, DispatchError::MissingSubject));
}

#[test]
fn subject_without_the_key_names_the_discriminant() {
    let registry = keyed();

    let wrong_map = Arg::map(&[("value", "tests")]);
    let err = registry.dispatch(&(), &[wrong_map], &Kwargs::new()).unwrap_err();
    assert!(matches!(err, DispatchError::MissingDiscriminant(name) if name == "key"));

    // A subject that is not a mapping at all fails the same way.
    let err = registry
        .dispatch(&(), &[Arg::Str("plain")], &Kwargs::new())
        .unwrap_err();
    assert!(matches!(err, DispatchError::MissingDiscriminant(name) if name == "key"));
}

#[derive(Debug, Clone, PartialEq)]
struct Data {
    attr: String,
    marker: String,
}

fn data(attr: &str, marker: &str) -> Data {
    Data {
        attr: attr.to_string(),
        marker: marker.to_string(),
    }
}

fn by_field() -> Registry<(), Data, String, (), bool> {
    Registry::builder()
        .field("attr", |d: &Data| Some(d.attr.clone()))
        .case("value-1".to_string(), |_: &(), d: &Data, _: &[Data], _: &()| {
            d.marker == "value-1"
        })
        .unwrap()
        .case("value-2".to_string(), |_: &(), d: &Data, _: &[Data], _: &()| {
            d.marker == "value-2"
        })
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn attribute_mode_routes_on_the_field_value() {
    let registry = by_field();

    // Routed to the handler registered for "value-2", not the first one.
    assert!(registry
        .dispatch(&(), &[data("value-2", "value-2")], &())
        .unwrap());
    assert!(registry
        .dispatch(&(), &[data("value-1", "value-1")], &())
        .unwrap());
}

#[test]
fn optional_field_absence_is_a_missing_discriminant() {
    struct Tagged {
        tag: Option<String>,
    }

    let registry: Registry<(), Tagged, String, (), u8> = Registry::builder()
        .field("tag", |t: &Tagged| t.tag.clone())
        .case("a".to_string(), |_: &(), _: &Tagged, _: &[Tagged], _: &()| 1)
        .unwrap()
        .build()
        .unwrap();

    let err = registry
        .dispatch(&(), &[Tagged { tag: None }], &())
        .unwrap_err();
    assert!(matches!(err, DispatchError::MissingDiscriminant(name) if name == "tag"));
}

/// A custom strategy for subjects the built-in selectors don't fit.
struct PairSelect;

impl Select<(u32, &'static str), u32> for PairSelect {
    fn name(&self) -> &str {
        "pair.0"
    }

    fn contains(&self, _: &(u32, &'static str)) -> bool {
        true
    }

    fn extract(&self, subject: &(u32, &'static str)) -> Option<u32> {
        Some(subject.0)
    }
}

#[test]
fn custom_selector_plugs_into_the_registry() {
    let registry: Registry<(), (u32, &'static str), u32, (), &'static str> = Registry::builder()
        .selector(PairSelect)
        .case(7, |_: &(), s: &(u32, &'static str), _: &[_], _: &()| s.1)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(registry.dispatch(&(), &[(7, "seven")], &()).unwrap(), "seven");
}
