//! # L-System Errors
//!
//! Parse errors carry the index of the offending token so callers can point
//! at the failing part of a program.

use shapes_mesh::MeshError;
use std::fmt;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with the index of the token where it occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Zero-based index into the whitespace-separated tokens.
    pub token: usize,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, token: usize) -> Self {
        Self { kind, token }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at token {}", self.kind, self.token)
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The program has no tokens.
    EmptyProgram,

    /// A command was the last token.
    MissingArgument {
        /// The command without an argument.
        command: String,
    },

    /// A command name outside the known set.
    UnknownCommand {
        /// The unrecognized name.
        command: String,
    },

    /// A numeric argument that does not parse.
    InvalidNumber {
        /// The command expecting a number.
        command: String,
        /// The invalid text.
        text: String,
    },

    /// The part after `.` in `rule name.weight` is not an integer.
    InvalidWeight {
        /// The invalid text.
        text: String,
    },

    /// A `call` names a rule that is never defined.
    UnknownRule {
        /// The missing rule name.
        name: String,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyProgram => write!(f, "empty program"),
            Self::MissingArgument { command } => {
                write!(f, "missing argument for '{}'", command)
            }
            Self::UnknownCommand { command } => write!(f, "unknown command '{}'", command),
            Self::InvalidNumber { command, text } => {
                write!(f, "invalid number '{}' for '{}'", text, command)
            }
            Self::InvalidWeight { text } => write!(f, "invalid rule weight '{}'", text),
            Self::UnknownRule { name } => write!(f, "call to undefined rule '{}'", name),
        }
    }
}

// =============================================================================
// L-SYSTEM ERROR
// =============================================================================

/// Errors from building an L-system mesh.
#[derive(Debug, Error)]
pub enum LSystemError {
    /// The program text did not parse
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Interpreter settings out of range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Tube generation or merging failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

impl LSystemError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Result type for L-system operations.
pub type LSystemResult<T> = Result<T, LSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new(
            ParseErrorKind::UnknownCommand {
                command: "jump".to_string(),
            },
            4,
        );
        let msg = error.to_string();
        assert!(msg.contains("unknown command 'jump'"));
        assert!(msg.contains("token 4"));
    }

    #[test]
    fn test_parse_error_converts() {
        let error: LSystemError = ParseError::new(ParseErrorKind::EmptyProgram, 0).into();
        assert!(matches!(error, LSystemError::Parse(_)));
        assert!(error.to_string().contains("empty program"));
    }

    #[test]
    fn test_mesh_error_converts() {
        let error: LSystemError = MeshError::invalid_parameter("bad").into();
        assert!(matches!(error, LSystemError::Mesh(_)));
    }
}
