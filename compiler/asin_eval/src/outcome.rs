//! Statement outcomes.

use crate::value::Value;

/// What executing a statement or block produced.
///
/// `Break` is a control signal, not a value: it is returned by `lumisan;`
/// and passed outward through blocks and conditionals until the nearest
/// enclosing loop consumes it.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A value-producing statement (a native call).
    Value(Value),
    /// Leave the innermost loop.
    Break,
    Empty,
}

impl Outcome {
    pub fn is_break(&self) -> bool {
        matches!(self, Outcome::Break)
    }
}
