//! The stepper engine
//!
//! [`Stepper`] owns the evaluation stack, the fixed token sequence, and one
//! optional [`HistoryEntry`] per expression position.  `step_forward`
//! evaluates the token at the cursor; `step_backward` reverses the most
//! recently applied token by reconstructing the prior stack state from its
//! history entry.  Every other observer is read-only.

use crate::expr::Operator;
use crate::stack::Stack;
use crate::stepper::errors::StepError;
use crate::stepper::history::HistoryEntry;
use crate::stepper::model::RenderModel;

const READY_TEXT: &str = "Ready!";
const DONE_TEXT: &str = "Done!";
const INSUFFICIENT_TEXT: &str =
    "Error: Need at least two numbers on the stack to perform arithmetic!";

/// Integer division rounding toward negative infinity, `None` on overflow.
///
/// Matches floor division rather than Rust's truncating `/`: `-7 / 2` is
/// `-4`, not `-3`.  The caller rejects a zero divisor first.
fn floor_div(left: i64, right: i64) -> Option<i64> {
    let quotient = left.checked_div(right)?;
    let remainder = left.checked_rem(right)?;
    if remainder != 0 && (remainder < 0) != (right < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// The bidirectional expression evaluator.
pub struct Stepper {
    /// Raw string tokens, fixed at construction
    expression: Vec<String>,
    /// Evaluation stack, exclusively owned
    stack: Stack<i64>,
    /// One entry per position, recorded when that position is first
    /// evaluated forward; overwritten on re-evaluation after an undo
    history: Vec<Option<HistoryEntry>>,
    /// Next token to evaluate; equals `expression.len()` when complete
    cursor: usize,
    /// Description of the most recent operation
    operation_text: String,
    /// Whether the most recent step attempt failed
    errored: bool,
}

impl Stepper {
    /// Create a stepper over a (postfix) token sequence.
    pub fn new(expression: Vec<String>) -> Self {
        let token_count = expression.len();
        Stepper {
            expression,
            stack: Stack::new(),
            history: vec![None; token_count],
            cursor: 0,
            operation_text: String::from(READY_TEXT),
            errored: false,
        }
    }

    /// Current cursor position within the expression.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of tokens.
    pub fn token_count(&self) -> usize {
        self.expression.len()
    }

    /// All tokens have been consumed.
    pub fn is_done(&self) -> bool {
        self.cursor == self.expression.len()
    }

    /// Read-only view of the evaluation stack.
    pub fn stack(&self) -> &Stack<i64> {
        &self.stack
    }

    /// Evaluate the token at the cursor and advance by one.
    ///
    /// `InvalidToken` and `InsufficientOperands` leave the cursor and the
    /// stack untouched but set the error operation text for rendering;
    /// `DivisionByZero` and `IntegerOverflow` are fatal and leave the state
    /// as it was before the step.
    pub fn step_forward(&mut self) -> Result<(), StepError> {
        if self.is_done() {
            return Err(StepError::AtEnd);
        }

        let position = self.cursor;
        let token = self.expression[position].clone();

        if let Some(op) = Operator::parse(&token) {
            if self.stack.len() < 2 {
                self.operation_text = String::from(INSUFFICIENT_TEXT);
                self.errored = true;
                return Err(StepError::InsufficientOperands { position });
            }

            // Size was checked, both pops succeed: right was on top.
            let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) else {
                return Err(StepError::HistoryCorruption {
                    message: String::from("stack size changed during operator step"),
                    position,
                });
            };

            let value = match op {
                Operator::Add => left.checked_add(right),
                Operator::Sub => left.checked_sub(right),
                Operator::Mul => left.checked_mul(right),
                Operator::Div => {
                    if right == 0 {
                        self.stack.push(left);
                        self.stack.push(right);
                        return Err(StepError::DivisionByZero { left, position });
                    }
                    floor_div(left, right)
                }
            };

            let Some(value) = value else {
                self.stack.push(left);
                self.stack.push(right);
                return Err(StepError::IntegerOverflow {
                    operation: format!("{} {} {}", left, op, right),
                    position,
                });
            };

            self.stack.push(value);
            self.history[position] = Some(HistoryEntry::Apply { op, left, right });
            self.operation_text = format!(
                "Popped {} and {} from stack, pushed {} {} {} = {} to stack",
                left, right, left, op, right, value
            );
        } else {
            match token.parse::<i64>() {
                Ok(value) => {
                    self.stack.push(value);
                    self.history[position] = Some(HistoryEntry::Push(value));
                    self.operation_text = format!("Pushed {} to stack", token);
                }
                Err(_) => {
                    self.operation_text =
                        format!("Error: {} is not an integer or a valid operation!", token);
                    self.errored = true;
                    return Err(StepError::InvalidToken { token, position });
                }
            }
        }

        self.errored = false;
        self.cursor += 1;
        Ok(())
    }

    /// Undo the most recently applied token by reconstructing the prior
    /// stack state from its history entry, then retreat the cursor.
    ///
    /// The entry at the vacated index is left in place; re-evaluating the
    /// position forward overwrites it.
    pub fn step_backward(&mut self) -> Result<(), StepError> {
        if self.cursor == 0 {
            return Err(StepError::AtStart);
        }

        let position = self.cursor - 1;
        let entry = self.history[position].ok_or_else(|| StepError::HistoryCorruption {
            message: String::from("no history entry for an evaluated position"),
            position,
        })?;

        match entry {
            HistoryEntry::Push(value) => {
                let popped = self.stack.pop().ok_or_else(|| StepError::HistoryCorruption {
                    message: String::from("stack empty while undoing a push"),
                    position,
                })?;
                if popped != value {
                    return Err(StepError::HistoryCorruption {
                        message: format!("expected {} on top of stack, found {}", value, popped),
                        position,
                    });
                }
                self.operation_text = format!("Undid push of {}", value);
            }
            HistoryEntry::Apply { op, left, right } => {
                self.stack.pop().ok_or_else(|| StepError::HistoryCorruption {
                    message: String::from("stack empty while undoing an operation"),
                    position,
                })?;
                // Restore pre-operation order: right was on top when popped.
                self.stack.push(left);
                self.stack.push(right);
                self.operation_text = format!(
                    "Undid {} {} {}, restored {} and {}",
                    left, op, right, left, right
                );
            }
        }

        self.errored = false;
        self.cursor = position;
        Ok(())
    }

    /// Take a pure snapshot of the observable state for rendering.
    pub fn render_model(&self) -> RenderModel {
        // Character offset of the cursor token: every prior token is
        // followed by exactly one separator space.
        let cursor_offset = self
            .expression
            .iter()
            .take(self.cursor)
            .map(|t| t.chars().count() + 1)
            .sum();

        let cursor_width = self
            .expression
            .get(self.cursor)
            .map(|t| t.chars().count())
            .unwrap_or(0);

        let operation_text = if self.is_done() {
            String::from(DONE_TEXT)
        } else {
            self.operation_text.clone()
        };

        RenderModel {
            stack_text: self.stack.render_string(),
            input_text: self.expression.join(" "),
            cursor_offset,
            cursor_width,
            operation_text,
            is_error: self.errored,
            current_step: self.cursor,
            total_steps: self.expression.len(),
        }
    }
}
