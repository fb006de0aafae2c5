//! Step error types for the expression stepper
//!
//! This module defines [`StepError`], which represents all errors that can
//! occur while stepping through an expression (as opposed to infix
//! conversion errors or terminal I/O errors).
//!
//! `InvalidToken` and `InsufficientOperands` halt forward progress but leave
//! the stepper state untouched; `DivisionByZero`, `IntegerOverflow`, and
//! `HistoryCorruption` are fatal.  `AtStart` and `AtEnd` reject steps whose
//! preconditions do not hold and hosts may treat them as no-ops.

use std::fmt;

/// Errors that can occur during forward or backward stepping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// A non-operator token failed integer parsing
    InvalidToken { token: String, position: usize },

    /// An operator was reached with fewer than two values on the stack
    InsufficientOperands { position: usize },

    /// Division with a zero right-hand operand
    DivisionByZero { left: i64, position: usize },

    /// Arithmetic result does not fit in a 64-bit signed integer
    IntegerOverflow { operation: String, position: usize },

    /// A history entry is inconsistent with the current stack contents
    HistoryCorruption { message: String, position: usize },

    /// Backward step requested at position zero
    AtStart,

    /// Forward step requested at the terminal position
    AtEnd,
}

impl StepError {
    /// The expression position the error occurred at, if it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            StepError::InvalidToken { position, .. }
            | StepError::InsufficientOperands { position }
            | StepError::DivisionByZero { position, .. }
            | StepError::IntegerOverflow { position, .. }
            | StepError::HistoryCorruption { position, .. } => Some(*position),
            StepError::AtStart | StepError::AtEnd => None,
        }
    }

    /// Fatal errors end the session; non-fatal ones only halt forward
    /// progress or reject a step whose precondition does not hold.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StepError::DivisionByZero { .. }
                | StepError::IntegerOverflow { .. }
                | StepError::HistoryCorruption { .. }
        )
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::InvalidToken { token, position } => {
                write!(
                    f,
                    "'{}' at position {} is not an integer or a valid operation",
                    token, position
                )
            }
            StepError::InsufficientOperands { position } => {
                write!(
                    f,
                    "operator at position {} needs at least two numbers on the stack",
                    position
                )
            }
            StepError::DivisionByZero { left, position } => {
                write!(f, "division of {} by zero at position {}", left, position)
            }
            StepError::IntegerOverflow {
                operation,
                position,
            } => {
                write!(
                    f,
                    "integer overflow in operation: {} at position {}",
                    operation, position
                )
            }
            StepError::HistoryCorruption { message, position } => {
                write!(
                    f,
                    "history corruption at position {}: {}",
                    position, message
                )
            }
            StepError::AtStart => {
                write!(f, "cannot step backward: already at the start")
            }
            StepError::AtEnd => {
                write!(f, "cannot step forward: evaluation is complete")
            }
        }
    }
}

impl std::error::Error for StepError {}
