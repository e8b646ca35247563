//! Runtime error taxonomy.
//!
//! Every failure during evaluation is an [`EvalError`]: a structured
//! [`EvalErrorKind`] rendered in the classic `(Class) : message` form, plus
//! the span of the innermost node where it arose. Factory functions below
//! build each kind from the values involved.

use std::fmt;
use std::io;

use asin_diagnostic::{Diagnostic, ErrorCode};
use asin_ir::{BinaryOp, Span, UnaryOp};
use thiserror::Error;

use crate::value::{ArrayRef, Value};

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Which namespace a name failed to resolve in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameSpace {
    Variable,
    Function,
}

impl fmt::Display for NameSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NameSpace::Variable => "variable",
            NameSpace::Function => "function",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("(NameError) : \"{name}\" is not a defined {space} name")]
    UndefinedName { name: String, space: NameSpace },

    #[error(
        "(TypeError) : Invalid operation: \"{left} {op} {right}\" <~ ({left_type} {op} {right_type})"
    )]
    InvalidBinary {
        left: String,
        op: &'static str,
        right: String,
        left_type: &'static str,
        right_type: &'static str,
    },

    #[error("(TypeError) : Invalid operation: \"{op} {operand_type}\" <~ ({op} {operand})")]
    InvalidUnary {
        op: &'static str,
        operand_type: &'static str,
        operand: String,
    },

    /// Bad argument count or type in a native call.
    #[error("(TypeError) : {function}() {message}")]
    InvalidArgument {
        function: &'static str,
        message: String,
    },

    #[error("(TypeError) : \"{name}\" ({type_name}) is not subscriptable")]
    NotSubscriptable {
        name: String,
        type_name: &'static str,
    },

    #[error("(TypeError) : Range bound \"{bound}\" ({type_name}) should be of type int")]
    InvalidRangeBound {
        bound: String,
        type_name: &'static str,
    },

    #[error("(ArithmeticError) : Invalid operation: Dividing {type_name} ({value}) by zero (0)")]
    DivisionByZero {
        type_name: &'static str,
        value: String,
    },

    #[error("(ArithmeticError) : Integer overflow: \"{operation}\"")]
    IntegerOverflow { operation: String },

    #[error("(ArithmeticError) : Math domain error: \"{operation}\"")]
    MathDomain { operation: String },

    #[error(
        "(IndexError) : {type_name} ~> \"{value}\" is not a valid index; index should be of type int"
    )]
    InvalidIndexType {
        type_name: &'static str,
        value: String,
    },

    #[error(
        "(IndexError) : Index (= {index}) is not within the list's ({list}) index range (0 to {last})"
    )]
    IndexOutOfRange { index: i64, list: String, last: i64 },

    #[error("(IndexError) : {function}() from an empty list")]
    EmptyList { function: &'static str },

    #[error("(InexistentFileError) : File \"{path}\" not found")]
    FileNotFound { path: String },

    #[error("(IOError) : {message}")]
    Io { message: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UndefinedName { .. } => ErrorCode::E6001,
            EvalErrorKind::InvalidBinary { .. }
            | EvalErrorKind::InvalidUnary { .. }
            | EvalErrorKind::InvalidArgument { .. }
            | EvalErrorKind::NotSubscriptable { .. }
            | EvalErrorKind::InvalidRangeBound { .. } => ErrorCode::E6002,
            EvalErrorKind::DivisionByZero { .. }
            | EvalErrorKind::IntegerOverflow { .. }
            | EvalErrorKind::MathDomain { .. } => ErrorCode::E6003,
            EvalErrorKind::InvalidIndexType { .. }
            | EvalErrorKind::IndexOutOfRange { .. }
            | EvalErrorKind::EmptyList { .. } => ErrorCode::E6004,
            EvalErrorKind::FileNotFound { .. } => ErrorCode::E6005,
            EvalErrorKind::Io { .. } => ErrorCode::E6006,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EvalErrorKind::UndefinedName {
                space: NameSpace::Variable,
                ..
            } => "not bound to a value",
            EvalErrorKind::UndefinedName {
                space: NameSpace::Function,
                ..
            } => "no built-in function with this name",
            EvalErrorKind::InvalidBinary { .. } => "unsupported operand types",
            EvalErrorKind::InvalidUnary { .. } => "unsupported operand type",
            EvalErrorKind::InvalidArgument { .. } => "invalid arguments",
            EvalErrorKind::NotSubscriptable { .. } => "not a list",
            EvalErrorKind::InvalidRangeBound { .. } => "range bound must be an int",
            EvalErrorKind::DivisionByZero { .. } => "division by zero",
            EvalErrorKind::IntegerOverflow { .. } => "result does not fit in a 64-bit integer",
            EvalErrorKind::MathDomain { .. } => "outside the function's domain",
            EvalErrorKind::InvalidIndexType { .. } => "index must be an int",
            EvalErrorKind::IndexOutOfRange { .. } => "index out of range",
            EvalErrorKind::EmptyList { .. } => "list is empty",
            EvalErrorKind::FileNotFound { .. } => "file not found",
            EvalErrorKind::Io { .. } => "I/O failure",
        }
    }

    fn note(&self) -> Option<&'static str> {
        match self {
            EvalErrorKind::UndefinedName {
                space: NameSpace::Variable,
                ..
            } => Some("variables are bound by assignment or by a `sa bawat` loop"),
            EvalErrorKind::UndefinedName {
                space: NameSpace::Function,
                ..
            } => Some("only built-in functions can be called"),
            EvalErrorKind::InvalidBinary { .. } => {
                Some("ints and floats mix freely; other operands must share a type")
            }
            EvalErrorKind::IndexOutOfRange { .. } => {
                Some("negative indices count back from the end of the list")
            }
            EvalErrorKind::InvalidRangeBound { .. } => {
                Some("`sa bawat` ranges are inclusive and step by one")
            }
            _ => None,
        }
    }
}

/// A runtime error with the span where it arose.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
    /// A likely fix, rendered as `help:`.
    pub help: Option<String>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            help: None,
        }
    }

    /// Host I/O failure with a fixed message.
    pub fn io(message: impl Into<String>) -> Self {
        EvalError::new(EvalErrorKind::Io {
            message: message.into(),
        })
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more specific one is already set.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: Option<String>) -> Self {
        self.help = help;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        if let Some(span) = self.span {
            diagnostic = diagnostic.with_label(span, self.kind.label());
        }
        if let Some(note) = self.kind.note() {
            diagnostic = diagnostic.with_note(note);
        }
        if let Some(help) = &self.help {
            diagnostic = diagnostic.with_help(help.clone());
        }
        diagnostic
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Name errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedName {
        name: name.to_owned(),
        space: NameSpace::Variable,
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedName {
        name: name.to_owned(),
        space: NameSpace::Function,
    })
}

// Type errors

#[cold]
pub fn invalid_binary(left: &Value, op: BinaryOp, right: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidBinary {
        left: left.to_string(),
        op: op.as_symbol(),
        right: right.to_string(),
        left_type: left.type_name(),
        right_type: right.type_name(),
    })
}

#[cold]
pub fn invalid_unary(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidUnary {
        op: op.as_symbol(),
        operand_type: operand.type_name(),
        operand: operand.to_string(),
    })
}

#[cold]
pub fn invalid_argument(function: &'static str, message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidArgument {
        function,
        message: message.into(),
    })
}

#[cold]
pub fn not_subscriptable(name: &str, value: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotSubscriptable {
        name: name.to_owned(),
        type_name: value.type_name(),
    })
}

#[cold]
pub fn invalid_range_bound(bound: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidRangeBound {
        bound: bound.to_string(),
        type_name: bound.type_name(),
    })
}

// Arithmetic errors

/// Division, floor division or modulo of `dividend` by zero.
#[cold]
pub fn division_by_zero(dividend: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero {
        type_name: dividend.type_name(),
        value: dividend.to_string(),
    })
}

#[cold]
pub fn integer_overflow(operation: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow {
        operation: operation.into(),
    })
}

#[cold]
pub fn math_domain(operation: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::MathDomain {
        operation: operation.into(),
    })
}

// Index errors

#[cold]
pub fn invalid_index_type(index: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidIndexType {
        type_name: index.type_name(),
        value: index.to_string(),
    })
}

#[cold]
pub fn index_out_of_range(index: i64, array: &ArrayRef) -> EvalError {
    let last = i64::try_from(array.len()).map_or(i64::MAX, |len| len - 1);
    EvalError::new(EvalErrorKind::IndexOutOfRange {
        index,
        list: Value::Array(array.clone()).to_string(),
        last,
    })
}

#[cold]
pub fn empty_list(function: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::EmptyList { function })
}

// File errors

#[cold]
pub fn file_not_found(path: &str) -> EvalError {
    EvalError::new(EvalErrorKind::FileNotFound {
        path: path.to_owned(),
    })
}

#[cold]
pub fn io_error(err: &io::Error) -> EvalError {
    EvalError::io(err.to_string())
}
