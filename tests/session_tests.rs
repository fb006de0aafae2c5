use std::collections::VecDeque;
use std::io;

use rpntty::expr::{infix_to_postfix, tokenize, ConvertError};
use rpntty::port::{run_session, DisplayPort, NavigationCommand, SessionError};
use rpntty::stepper::{RenderModel, StepError, Stepper};

/// A display port driven by a pre-recorded command script, capturing every
/// frame it is asked to render.
struct ScriptedPort {
    commands: VecDeque<NavigationCommand>,
    frames: Vec<RenderModel>,
}

impl ScriptedPort {
    fn new(commands: impl IntoIterator<Item = NavigationCommand>) -> Self {
        ScriptedPort {
            commands: commands.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    fn last_frame(&self) -> &RenderModel {
        self.frames.last().expect("no frames rendered")
    }
}

impl DisplayPort for ScriptedPort {
    fn render(&mut self, model: &RenderModel) -> io::Result<NavigationCommand> {
        self.frames.push(model.clone());
        // Exhausted scripts quit, like a user closing the session.
        Ok(self
            .commands
            .pop_front()
            .unwrap_or(NavigationCommand::Quit))
    }
}

#[test]
fn full_session_evaluates_the_reference_expression() {
    let mut stepper = Stepper::new(tokenize("5 1 2 + 4 * + 3 -"));
    let mut port = ScriptedPort::new(vec![NavigationCommand::Forward; 9]);

    run_session(&mut stepper, &mut port).expect("session failed");

    // The initial frame plus one frame after each of the 9 steps.
    assert_eq!(port.frames.len(), 10);
    let last = port.last_frame();
    assert_eq!(last.stack_text, "14 (top)");
    assert_eq!(last.operation_text, "Done!");
    assert!(last.is_done());
}

#[test]
fn backward_navigation_retraces_forward_steps() {
    let mut stepper = Stepper::new(tokenize("3 4 +"));
    let mut port = ScriptedPort::new(vec![
        NavigationCommand::Forward,
        NavigationCommand::Forward,
        NavigationCommand::Forward,
        NavigationCommand::Backward,
        NavigationCommand::Backward,
        NavigationCommand::Backward,
        NavigationCommand::Quit,
    ]);

    run_session(&mut stepper, &mut port).expect("session failed");

    let last = port.last_frame();
    assert_eq!(last.current_step, 0);
    assert_eq!(last.stack_text, "(empty)");
    assert_eq!(stepper.cursor(), 0);
    assert!(stepper.stack().is_empty());
}

#[test]
fn boundary_steps_are_no_ops() {
    let mut stepper = Stepper::new(tokenize("7"));
    let mut port = ScriptedPort::new(vec![
        NavigationCommand::Backward, // at start: no-op
        NavigationCommand::Forward,
        NavigationCommand::Forward, // at end: no-op
        NavigationCommand::Quit,
    ]);

    run_session(&mut stepper, &mut port).expect("session failed");

    let last = port.last_frame();
    assert_eq!(last.current_step, 1);
    assert_eq!(last.stack_text, "7 (top)");
}

#[test]
fn invalid_token_halts_the_session_with_an_error_frame() {
    let mut stepper = Stepper::new(tokenize("1 oops +"));
    let mut port = ScriptedPort::new(vec![NavigationCommand::Forward; 5]);

    let err = run_session(&mut stepper, &mut port).unwrap_err();
    match err {
        SessionError::Step(StepError::InvalidToken { token, position }) => {
            assert_eq!(token, "oops");
            assert_eq!(position, 1);
        }
        other => panic!("unexpected session error: {}", other),
    }

    // The halting error state was rendered before the session ended.
    let last = port.last_frame();
    assert!(last.is_error);
    assert_eq!(
        last.operation_text,
        "Error: oops is not an integer or a valid operation!"
    );
    assert_eq!(last.current_step, 1);
}

#[test]
fn lone_operator_reports_insufficient_operands() {
    let mut stepper = Stepper::new(tokenize("+"));
    let mut port = ScriptedPort::new(vec![NavigationCommand::Forward; 2]);

    let err = run_session(&mut stepper, &mut port).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Step(StepError::InsufficientOperands { position: 0 })
    ));

    let last = port.last_frame();
    assert!(last.is_error);
    assert_eq!(
        last.operation_text,
        "Error: Need at least two numbers on the stack to perform arithmetic!"
    );
    assert_eq!(last.current_step, 0);
}

#[test]
fn division_by_zero_ends_the_session_fatally() {
    let mut stepper = Stepper::new(tokenize("1 0 /"));
    let mut port = ScriptedPort::new(vec![NavigationCommand::Forward; 3]);

    let err = run_session(&mut stepper, &mut port).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Step(StepError::DivisionByZero {
            left: 1,
            position: 2
        })
    ));
}

#[test]
fn infix_input_converts_then_evaluates() {
    let postfix = infix_to_postfix(&tokenize("3 + 4 * 2")).expect("conversion failed");
    assert_eq!(postfix, tokenize("3 4 2 * +"));

    let mut stepper = Stepper::new(postfix);
    let mut port = ScriptedPort::new(vec![NavigationCommand::Forward; 5]);

    run_session(&mut stepper, &mut port).expect("session failed");
    assert_eq!(port.last_frame().stack_text, "11 (top)");
}

#[test]
fn mismatched_parens_never_reach_the_stepper() {
    assert_eq!(
        infix_to_postfix(&tokenize("( 1 + 2")),
        Err(ConvertError::MismatchedParens)
    );
}
