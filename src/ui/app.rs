//! Crossterm-backed display port
//!
//! [`App`] owns the ratatui terminal for the duration of a session and
//! implements [`DisplayPort`]: each call draws one frame from the render
//! model, then blocks until a key press that maps to a navigation command.

use crate::port::{DisplayPort, NavigationCommand};
use crate::stepper::RenderModel;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// The terminal application implementing the display port.
pub struct App<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> App<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        App { terminal }
    }

    /// Give the terminal back for restoration after the session ends.
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    fn draw(&mut self, model: &RenderModel) -> io::Result<()> {
        self.terminal.draw(|frame| render(frame, model))?;
        Ok(())
    }

    /// Block until a key press that maps to a navigation command.
    fn read_command(&mut self) -> io::Result<NavigationCommand> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                        return Ok(NavigationCommand::Forward);
                    }
                    KeyCode::Left | KeyCode::Up => {
                        return Ok(NavigationCommand::Backward);
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(NavigationCommand::Quit);
                    }
                    _ => {}
                }
            }
        }
    }
}

impl<B: Backend> DisplayPort for App<B> {
    fn render(&mut self, model: &RenderModel) -> io::Result<NavigationCommand> {
        self.draw(model)?;
        self.read_command()
    }
}

/// Render one frame: stack, input, operation, status bar.
fn render(frame: &mut Frame, model: &RenderModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // stack
            Constraint::Length(4), // input + caret
            Constraint::Min(3),    // operation
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    super::panes::render_stack_pane(frame, chunks[0], model);
    super::panes::render_input_pane(frame, chunks[1], model);
    super::panes::render_operation_pane(frame, chunks[2], model);
    super::panes::render_status_bar(frame, chunks[3], model);
}
