#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::{EvalErrorKind, NameSpace};
use pretty_assertions::assert_eq;

#[test]
fn test_set_and_get_variable() {
    let mut env = Environment::empty();
    env.set_variable("x", Value::Int(1));
    env.set_variable("x", Value::str("dalawa"));
    assert_eq!(env.get_variable("x").unwrap(), Value::str("dalawa"));
}

#[test]
fn test_missing_variable_is_name_error() {
    let env = Environment::empty();
    let err = env.get_variable("wala").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedName {
            name: "wala".into(),
            space: NameSpace::Variable,
        }
    );
    assert_eq!(
        err.to_string(),
        "(NameError) : \"wala\" is not a defined variable name"
    );
}

#[test]
fn test_delete_variable() {
    let mut env = Environment::empty();
    env.set_variable("i", Value::Int(3));
    env.delete_variable("i");
    assert!(!env.has_variable("i"));
    // Deleting again is a no-op.
    env.delete_variable("i");
}

#[test]
fn test_namespaces_are_independent() {
    let mut env = Environment::new();
    env.set_variable("haba", Value::Int(10));
    assert_eq!(env.get_variable("haba").unwrap(), Value::Int(10));
    assert_eq!(env.get_function("haba").unwrap().name(), "haba");

    assert!(env.get_variable("bilang").is_err());
    let err = env.get_function("x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "(NameError) : \"x\" is not a defined function name"
    );
}

#[test]
fn test_prelude_constants() {
    let env = Environment::new();
    assert_eq!(env.get_variable("asin_pi").unwrap(), Value::Float(PI));
    assert_eq!(env.get_variable("asin_e").unwrap(), Value::Float(E));
}

#[test]
fn test_empty_environment_has_no_natives_or_prelude() {
    let env = Environment::empty();
    assert_eq!(env.function_count(), 0);
    assert!(!env.has_variable("asin_pi"));
}

#[test]
fn test_with_registry_uses_given_functions() {
    let env = Environment::with_registry(&Registry::empty());
    assert_eq!(env.function_count(), 0);
    assert!(env.has_variable("asin_e"));
    assert_eq!(
        Environment::new().function_count(),
        Registry::standard().iter().count()
    );
}

#[test]
fn test_misspelled_names_get_help() {
    let mut env = Environment::new();
    env.set_variable("kabuuan", Value::Int(0));

    let err = env.get_variable("kabuan").unwrap_err();
    assert_eq!(err.help.as_deref(), Some("did you mean `kabuuan`?"));

    let err = env.get_function("bilng").unwrap_err();
    assert_eq!(err.help.as_deref(), Some("did you mean `bilang`?"));

    let err = env.get_variable("q").unwrap_err();
    assert_eq!(err.help, None);
}
