//! Expression tokenization and infix conversion
//!
//! This module provides the front half of the pipeline:
//! - [`token`]: whitespace tokenization and the [`Operator`] type
//! - [`infix`]: shunting-yard conversion from infix to postfix order
//!
//! Tokens are kept as raw strings; operand validation happens at evaluation
//! time in the stepper, matching the error reporting the visualizer shows
//! for a bad token at its expression position.

pub mod infix;
pub mod token;

pub use infix::{infix_to_postfix, ConvertError};
pub use token::{tokenize, Operator};
