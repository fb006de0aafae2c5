//! Display-port contract and the host session loop
//!
//! The core performs no I/O of its own.  Each iteration of [`run_session`]
//! takes a [`RenderModel`] snapshot, hands it to the [`DisplayPort`], and
//! applies the [`NavigationCommand`] the port returns.  All blocking (waiting
//! for the next key press) lives inside the port.

use crate::stepper::{RenderModel, StepError, Stepper};
use std::fmt;
use std::io;

/// The next action requested by the user through the display port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Forward,
    Backward,
    Quit,
}

/// Anything that can draw a [`RenderModel`] and produce the next command.
///
/// `render` blocks until the user has chosen; the session loop calls it once
/// per step.
pub trait DisplayPort {
    fn render(&mut self, model: &RenderModel) -> io::Result<NavigationCommand>;
}

/// Errors that can end a session.
#[derive(Debug)]
pub enum SessionError {
    /// The display port failed to draw or read input
    Io(io::Error),
    /// A step failed in a way the session cannot continue from
    Step(StepError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "display port error: {}", e),
            SessionError::Step(e) => write!(f, "step error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            SessionError::Step(e) => Some(e),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}

/// Drive a stepper through a display port until the user quits or stepping
/// can no longer continue.
///
/// Steps rejected at the boundaries (`AtStart`, `AtEnd`) are treated as
/// no-ops.  A halting evaluation error (`InvalidToken`,
/// `InsufficientOperands`) is rendered once more so the user sees the error
/// state, then ends the session.  Fatal errors propagate immediately.
pub fn run_session<P: DisplayPort>(
    stepper: &mut Stepper,
    port: &mut P,
) -> Result<(), SessionError> {
    log::info!(
        "session start: {} token(s): {}",
        stepper.token_count(),
        stepper.render_model().input_text
    );

    loop {
        let model = stepper.render_model();
        let command = port.render(&model)?;
        log::debug!("command {:?} at cursor {}", command, stepper.cursor());

        match command {
            NavigationCommand::Quit => {
                log::info!("session quit at cursor {}", stepper.cursor());
                return Ok(());
            }
            NavigationCommand::Forward => match stepper.step_forward() {
                Ok(()) => {}
                Err(StepError::AtEnd) => {}
                Err(e) if e.is_fatal() => return Err(SessionError::Step(e)),
                Err(e) => {
                    // Halting error: show the error state, wait for one
                    // acknowledging key, then end the session.
                    log::warn!("evaluation halted: {}", e);
                    let model = stepper.render_model();
                    port.render(&model)?;
                    return Err(SessionError::Step(e));
                }
            },
            NavigationCommand::Backward => match stepper.step_backward() {
                Ok(()) => {}
                Err(StepError::AtStart) => {}
                Err(e) => return Err(SessionError::Step(e)),
            },
        }
    }
}
