//! Error codes for all interpreter diagnostics.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unrecognized token
    E0001,

    /// Offending token, no matching grammar rule
    E1001,
    /// Unexpected end of input
    E1002,

    /// Undefined variable or function name
    E6001,
    /// Invalid operand, argument or subscript type
    E6002,
    /// Division by zero, overflow or math domain error
    E6003,
    /// Invalid or out-of-range index
    E6004,
    /// File not found
    E6005,
    /// Host I/O failure
    E6006,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
        }
    }

    /// Classic error class name shown in the message prefix.
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "LexicalError",
            ErrorCode::E1001 | ErrorCode::E1002 => "SyntaxError",
            ErrorCode::E6001 => "NameError",
            ErrorCode::E6002 => "TypeError",
            ErrorCode::E6003 => "ArithmeticError",
            ErrorCode::E6004 => "IndexError",
            ErrorCode::E6005 => "InexistentFileError",
            ErrorCode::E6006 => "IOError",
        }
    }

    pub fn is_runtime(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
