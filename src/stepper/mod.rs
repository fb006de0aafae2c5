//! The expression stepper: the core evaluation state machine
//!
//! This module provides the bidirectional evaluation engine:
//! - [`engine`]: the [`Stepper`] owning cursor, stack, and history
//! - [`history`]: the typed per-position [`HistoryEntry`] record
//! - [`errors`]: step error types
//! - [`model`]: the [`RenderModel`] snapshot handed to a display port
//!
//! # Evaluation model
//!
//! The stepper's observable state is fully captured by the cursor, the stack
//! contents, and the history entries for positions below the cursor.  A
//! forward step evaluates the token at the cursor and records how to undo
//! it; a backward step reconstructs the prior stack state from that record.

pub mod engine;
pub mod errors;
pub mod history;
pub mod model;

pub use engine::Stepper;
pub use errors::StepError;
pub use history::HistoryEntry;
pub use model::RenderModel;
