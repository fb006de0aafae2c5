//! Infix to postfix conversion (shunting-yard)
//!
//! Converts a token sequence in conventional infix order into postfix order
//! using an auxiliary operator stack and the precedence comparison on
//! [`Operator`].  Operand tokens pass straight through unvalidated; the
//! stepper reports bad operands at evaluation time.

use crate::expr::token::Operator;
use crate::stack::Stack;
use std::fmt;

/// Errors from infix conversion, surfaced before any stepping begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// Parenthesis nesting could not be resolved
    MismatchedParens,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MismatchedParens => {
                write!(f, "mismatched parentheses in infix expression")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Convert an infix token sequence to postfix order.
///
/// Operators pop previously stacked operators of greater or equal
/// precedence to the output before being pushed; `(` stops the popping and
/// `)` drains back to the matching `(`.  Any parenthesis left unmatched on
/// either side yields [`ConvertError::MismatchedParens`].
pub fn infix_to_postfix(tokens: &[String]) -> Result<Vec<String>, ConvertError> {
    let mut postfix = Vec::with_capacity(tokens.len());
    let mut ops: Stack<String> = Stack::new();

    for token in tokens {
        if let Some(incoming) = Operator::parse(token) {
            loop {
                let pops = ops
                    .peek()
                    .and_then(|top| Operator::parse(top))
                    .is_some_and(|stacked| stacked.pops_before(incoming));
                if !pops {
                    break;
                }
                if let Some(top) = ops.pop() {
                    postfix.push(top);
                }
            }
            ops.push(token.clone());
        } else if token == "(" {
            ops.push(token.clone());
        } else if token == ")" {
            loop {
                match ops.pop() {
                    None => return Err(ConvertError::MismatchedParens),
                    Some(top) if top == "(" => break,
                    Some(top) => postfix.push(top),
                }
            }
        } else {
            postfix.push(token.clone());
        }
    }

    // Drain remaining operators; an open paren surfacing here was never closed.
    while let Some(top) = ops.pop() {
        if top == "(" {
            return Err(ConvertError::MismatchedParens);
        }
        postfix.push(top);
    }

    Ok(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(input: &str) -> Vec<String> {
        crate::expr::tokenize(input)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(
            infix_to_postfix(&toks("3 + 4 * 2")).unwrap(),
            toks("3 4 2 * +")
        );
    }

    #[test]
    fn same_tier_operators_are_left_associative() {
        assert_eq!(infix_to_postfix(&toks("1 - 2 - 3")).unwrap(), toks("1 2 - 3 -"));
        assert_eq!(infix_to_postfix(&toks("8 / 4 * 2")).unwrap(), toks("8 4 / 2 *"));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            infix_to_postfix(&toks("( 1 + 2 ) * 3")).unwrap(),
            toks("1 2 + 3 *")
        );
    }

    #[test]
    fn unclosed_open_paren_is_rejected() {
        assert_eq!(
            infix_to_postfix(&toks("( 1 + 2")),
            Err(ConvertError::MismatchedParens)
        );
    }

    #[test]
    fn stray_close_paren_is_rejected() {
        assert_eq!(
            infix_to_postfix(&toks(")")),
            Err(ConvertError::MismatchedParens)
        );
    }

    #[test]
    fn operands_pass_through_unvalidated() {
        // Conversion never inspects operand tokens; the stepper rejects them.
        assert_eq!(
            infix_to_postfix(&toks("foo + 1")).unwrap(),
            toks("foo 1 +")
        );
    }
}
