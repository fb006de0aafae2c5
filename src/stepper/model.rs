//! Render model handed to the display port
//!
//! A [`RenderModel`] is a pure snapshot of the stepper's observable state.
//! Taking two snapshots without an intervening step produces identical
//! models; the port never reaches back into the stepper.

/// Snapshot of everything a display port needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    /// Stack contents, bottom-to-top, with the `(top)` marker
    pub stack_text: String,

    /// The full original expression joined with single spaces
    pub input_text: String,

    /// Character offset of the token at the cursor within `input_text`
    pub cursor_offset: usize,

    /// Character width of the token at the cursor; zero at the terminal state
    pub cursor_width: usize,

    /// Human-readable description of the most recent operation
    pub operation_text: String,

    /// Whether the most recent step attempt failed
    pub is_error: bool,

    /// Current cursor position (number of evaluated tokens)
    pub current_step: usize,

    /// Total number of tokens in the expression
    pub total_steps: usize,
}

impl RenderModel {
    /// All tokens consumed, nothing left to evaluate.
    pub fn is_done(&self) -> bool {
        self.current_step == self.total_steps
    }
}
