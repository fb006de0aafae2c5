//! # Introduction
//!
//! rpntty evaluates a Reverse Polish Notation arithmetic expression one token
//! at a time, keeping enough history per step to reverse it exactly.  The
//! evaluation state is navigated forward and backward through a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Expression → Tokens → (infix conversion) → Stepper → RenderModel → TUI
//! ```
//!
//! 1. [`expr`] — splits the input into tokens and optionally converts infix
//!    notation to postfix with the shunting-yard algorithm.
//! 2. [`stack`] — the array-backed LIFO [`stack::Stack`] holding evaluation
//!    values (and operator tokens during conversion).
//! 3. [`stepper`] — the core state machine: cursor, stack, and a typed
//!    [`stepper::HistoryEntry`] per evaluated position, with bidirectional
//!    step navigation.
//! 4. [`port`] — the display-port contract: the host loop hands a
//!    [`stepper::RenderModel`] to the port and gets the next
//!    [`port::NavigationCommand`] back.
//! 5. [`ui`] — ratatui-based TUI implementing the display port; not part of
//!    the stable library API.
//!
//! ## Supported expressions
//!
//! Whitespace-separated signed integer literals and the four binary
//! operators `+ - * /` (integer division with floor semantics).  Infix input
//! may additionally use parentheses.

pub mod expr;
pub mod port;
pub mod stack;
pub mod stepper;
pub mod ui;
