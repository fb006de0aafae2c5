//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes, organized
//! by responsibility:
//!
//! - [`stack`]: evaluation stack contents with the `(top)` marker
//! - [`input`]: the original expression with the position cursor underneath
//! - [`operation`]: description of the most recent operation
//! - [`status`]: status bar with step counter, keybindings, and state badges
//!
//! Each pane module exports a stateless `render_*_pane()` function that
//! draws one region of the frame from the shared
//! [`RenderModel`](crate::stepper::RenderModel).

pub mod input;
pub mod operation;
pub mod stack;
pub mod status;

// Re-export render functions for convenience
pub use input::render_input_pane;
pub use operation::render_operation_pane;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
