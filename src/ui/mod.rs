//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — the crossterm-backed [`App`], which implements the
//!   [`DisplayPort`](crate::port::DisplayPort) contract: draw one frame,
//!   block for the next navigation key
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (stack, input, operation, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a ratatui
//! `Terminal` and hand it to [`run_session`](crate::port::run_session).

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
