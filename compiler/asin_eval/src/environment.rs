//! Dual-namespace environment.
//!
//! Variables and native functions live in separate tables. Assignment only
//! ever touches the variable table; the function table is filled once from
//! a [`Registry`] when the environment is built and has no setter that
//! program evaluation can reach.

use std::f64::consts::{E, PI};

use rustc_hash::FxHashMap;

use crate::errors::{undefined_function, undefined_variable, EvalResult};
use crate::natives::{NativeFunction, Registry};
use crate::suggest::did_you_mean;
use crate::value::Value;

/// Bindings for one program run.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    variables: FxHashMap<String, Value>,
    functions: FxHashMap<&'static str, NativeFunction>,
}

impl Environment {
    /// Standard natives plus the `asin_pi` / `asin_e` prelude.
    pub fn new() -> Self {
        Self::with_registry(&Registry::standard())
    }

    /// No natives and no prelude.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Natives from `registry` plus the prelude.
    pub fn with_registry(registry: &Registry) -> Self {
        let mut env = Self::empty();
        for function in registry.iter() {
            env.functions.insert(function.name(), *function);
        }
        env.set_variable("asin_pi", Value::Float(PI));
        env.set_variable("asin_e", Value::Float(E));
        env
    }

    /// Bind or rebind `name`.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_owned(), value);
        }
    }

    pub fn get_variable(&self, name: &str) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| {
                let known = self.variables.keys().map(String::as_str);
                undefined_variable(name).with_help(did_you_mean(name, known))
            })
    }

    /// Remove `name`; removing an unbound name is a no-op.
    pub fn delete_variable(&mut self, name: &str) {
        self.variables.remove(name);
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn get_function(&self, name: &str) -> EvalResult<NativeFunction> {
        self.functions
            .get(name)
            .copied()
            .ok_or_else(|| {
                let known = self.functions.keys().copied();
                undefined_function(name).with_help(did_you_mean(name, known))
            })
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

#[cfg(test)]
mod tests;
