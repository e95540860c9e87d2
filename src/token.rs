/// Possible tokens to find in a normalized, function-free input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An arithmetic operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Pow,
    /// Unary minus
    Neg,
}

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Neg => 3,
            Self::Pow => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div | Self::Mod => true,
            Self::Pow | Self::Neg => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Check if the operator takes a single operand
    pub fn is_unary(self) -> bool {
        self == Self::Neg
    }
}

#[cfg(test)]
mod tests {
    use super::Op;

    #[test]
    fn precedence_order() {
        assert!(Op::Pow.precedence() > Op::Neg.precedence());
        assert!(Op::Neg.precedence() > Op::Mul.precedence());
        assert_eq!(Op::Mul.precedence(), Op::Mod.precedence());
        assert!(Op::Div.precedence() > Op::Plus.precedence());
        assert_eq!(Op::Plus.precedence(), Op::Minus.precedence());
    }

    #[test]
    fn associativity() {
        assert!(Op::Pow.is_right_associative());
        assert!(Op::Minus.is_left_associative());
        assert!(Op::Neg.is_unary());
        assert!(!Op::Minus.is_unary());
    }
}
