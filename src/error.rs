#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A `)` with no matching `(` on the stack, or a `(` left unmatched
    /// after all tokens are consumed.
    MismatchedParentheses,
    /// An operator was reached during evaluation with fewer than two
    /// values on the operand stack.
    InsufficientOperands(char),
    /// An operator symbol outside the recognized set `{+,-,*,/,^}`.
    UnknownOperator(char),
    /// The operand stack did not hold exactly one value after evaluation.
    InvalidPostfixExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EvalError::MismatchedParentheses => write!(f, "mismatched parentheses"),
            EvalError::InsufficientOperands(op) => {
                write!(f, "insufficient operands for operator: '{}'", op)
            }
            EvalError::UnknownOperator(op) => write!(f, "unknown operator: '{}'", op),
            EvalError::InvalidPostfixExpression => write!(f, "invalid postfix expression"),
        }
    }
}
