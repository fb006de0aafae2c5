//! Raw tokens and arithmetic operators
//!
//! An expression is a flat sequence of whitespace-separated string tokens.
//! A token is either an [`Operator`], an integer literal, or (during infix
//! conversion only) a parenthesis marker.  Anything else is rejected when
//! the stepper reaches it.

use std::fmt;

/// Split a raw expression string into its whitespace-separated tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// The four supported binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Parse a token as an operator.  Only the exact single-character
    /// spellings match, so a negative literal like `-7` stays an operand.
    pub fn parse(token: &str) -> Option<Operator> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Precedence tier: additive operators bind looser than multiplicative.
    fn tier(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 0,
            Operator::Mul | Operator::Div => 1,
        }
    }

    /// Does `self`, sitting on the operator stack, have precedence greater
    /// than or equal to `incoming`?  True means `self` is popped to the
    /// output before `incoming` is pushed, which yields standard
    /// left-associative behavior for all four operators.
    pub fn pops_before(self, incoming: Operator) -> bool {
        self.tier() >= incoming.tier()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_operator_tokens_only() {
        assert_eq!(Operator::parse("+"), Some(Operator::Add));
        assert_eq!(Operator::parse("/"), Some(Operator::Div));
        assert_eq!(Operator::parse("-7"), None);
        assert_eq!(Operator::parse("**"), None);
        assert_eq!(Operator::parse(""), None);
    }

    #[test]
    fn precedence_tie_break_table() {
        // Same tier pops in both directions (left associativity).
        assert!(Operator::Add.pops_before(Operator::Sub));
        assert!(Operator::Mul.pops_before(Operator::Div));
        // Additive on the stack never pops before multiplicative.
        assert!(!Operator::Add.pops_before(Operator::Mul));
        assert!(!Operator::Sub.pops_before(Operator::Div));
        // Multiplicative on the stack always pops first.
        assert!(Operator::Mul.pops_before(Operator::Add));
        assert!(Operator::Div.pops_before(Operator::Sub));
    }

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("3  +\t4"), vec!["3", "+", "4"]);
        assert!(tokenize("   ").is_empty());
    }
}
