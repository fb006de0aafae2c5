//! Typed per-step history records
//!
//! Each forward step records one [`HistoryEntry`] at its expression
//! position.  The entry carries typed values directly rather than formatted
//! text, so undoing a step never re-parses anything: a recorded literal is
//! simply discarded from the stack, and a recorded operation restores the
//! two operands it consumed.

use crate::expr::Operator;

/// The recorded effect of one forward step, sufficient to reverse it exactly.
///
/// Immutable once recorded.  An entry left behind by a backward step is
/// logically superseded when its position is re-evaluated forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEntry {
    /// A literal was pushed onto the stack
    Push(i64),

    /// An operator consumed two operands (`right` popped first, then `left`)
    /// and pushed `left op right`
    Apply {
        op: Operator,
        left: i64,
        right: i64,
    },
}
