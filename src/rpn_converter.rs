use crate::error::EvalError;
use crate::rpn_evaluator::RpnEvaluator;
use crate::tokenizer::Token;

#[derive(Debug, PartialEq, Clone)]
pub struct RPNExpr(pub Vec<Token>);

impl std::ops::Deref for RPNExpr {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for RPNExpr {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

pub struct RpnConverter;

impl RpnConverter {
    /// Returns the precedence of the operator. Higher binds tighter;
    /// anything outside the recognized set gets 0 and never triggers popping.
    fn precedence(op: char) -> i32 {
        match op {
            '+' | '-' => 2,
            '*' | '/' => 3,
            '^' => 4,
            _ => 0,
        }
    }

    /// Converts infix notation to Reverse Polish Notation
    /// using the Shunting Yard algorithm.
    pub fn to_postfix(tokens: &[Token]) -> Result<RPNExpr, EvalError> {
        use crate::tokenizer::Token::*;

        let mut output = Vec::new();
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens.iter().copied() {
            match token {
                Number(_) => output.push(token),
                // `^` goes straight onto the stack without popping a prior
                // `^`, so chained exponentiation stays nested and unwinds
                // right to left. Correct for `^` only; a new right-associative
                // operator needs its own branch here.
                Operator('^') => stack.push(token),
                Operator('(') => stack.push(token),
                Operator(')') => {
                    let mut found = false;
                    while let Some(top) = stack.pop() {
                        if matches!(top, Operator('(')) {
                            found = true;
                            break;
                        }
                        output.push(top);
                    }

                    if !found {
                        return Err(EvalError::MismatchedParentheses);
                    }
                }
                Operator(op) => {
                    // `>=` makes equal-precedence operators accumulate left
                    // to right.
                    while let Some(&Operator(top)) = stack.last() {
                        if Self::precedence(top) >= Self::precedence(op) {
                            output.push(stack.pop().unwrap());
                        } else {
                            break;
                        }
                    }

                    stack.push(token);
                }
            }
        }

        while let Some(top) = stack.pop() {
            if matches!(top, Operator('(')) {
                return Err(EvalError::MismatchedParentheses);
            }
            output.push(top);
        }

        Ok(RPNExpr(output))
    }

    /// Converts the infix token sequence to postfix and immediately
    /// evaluates it.
    pub fn convert(tokens: &[Token]) -> Result<f64, EvalError> {
        let rpn = Self::to_postfix(tokens)?;
        RpnEvaluator::evaluate(&rpn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpn_converter() {
        let tokens = vec![
            Token::Number(1.0),
            Token::Operator('+'),
            Token::Number(2.0),
            Token::Operator('*'),
            Token::Number(3.0),
        ];

        assert_eq!(
            RpnConverter::to_postfix(&tokens).unwrap(),
            RPNExpr(vec![
                Token::Number(1.0),
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Operator('*'),
                Token::Operator('+'),
            ])
        );
    }

    #[test]
    fn test_rpn_converter_parentheses() {
        let tokens = vec![
            Token::Operator('('),
            Token::Number(1.0),
            Token::Operator('+'),
            Token::Number(2.0),
            Token::Operator(')'),
            Token::Operator('*'),
            Token::Number(3.0),
        ];

        assert_eq!(
            RpnConverter::to_postfix(&tokens).unwrap(),
            RPNExpr(vec![
                Token::Number(1.0),
                Token::Number(2.0),
                Token::Operator('+'),
                Token::Number(3.0),
                Token::Operator('*'),
            ])
        );
    }

    #[test]
    fn test_rpn_converter_left_associativity() {
        let tokens = vec![
            Token::Number(10.0),
            Token::Operator('-'),
            Token::Number(3.0),
            Token::Operator('-'),
            Token::Number(2.0),
        ];

        assert_eq!(
            RpnConverter::to_postfix(&tokens).unwrap(),
            RPNExpr(vec![
                Token::Number(10.0),
                Token::Number(3.0),
                Token::Operator('-'),
                Token::Number(2.0),
                Token::Operator('-'),
            ])
        );
    }

    #[test]
    fn test_rpn_converter_right_associative_pow() {
        let tokens = vec![
            Token::Number(2.0),
            Token::Operator('^'),
            Token::Number(3.0),
            Token::Operator('^'),
            Token::Number(2.0),
        ];

        assert_eq!(
            RpnConverter::to_postfix(&tokens).unwrap(),
            RPNExpr(vec![
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Number(2.0),
                Token::Operator('^'),
                Token::Operator('^'),
            ])
        );
    }

    #[test]
    fn test_rpn_converter_mismatched_closing_paren() {
        let tokens = vec![
            Token::Number(1.0),
            Token::Operator('+'),
            Token::Number(2.0),
            Token::Operator(')'),
        ];

        assert_eq!(
            RpnConverter::to_postfix(&tokens).unwrap_err(),
            EvalError::MismatchedParentheses
        );
    }

    #[test]
    fn test_rpn_converter_mismatched_opening_paren() {
        let tokens = vec![
            Token::Operator('('),
            Token::Number(1.0),
            Token::Operator('+'),
            Token::Number(2.0),
        ];

        assert_eq!(
            RpnConverter::to_postfix(&tokens).unwrap_err(),
            EvalError::MismatchedParentheses
        );
    }

    #[test]
    fn test_convert_chains_evaluation() {
        let tokens = vec![
            Token::Number(2.0),
            Token::Operator('*'),
            Token::Number(4.0),
            Token::Operator('-'),
            Token::Number(1.0),
        ];

        assert_eq!(RpnConverter::convert(&tokens).unwrap(), 7.0);
    }
}
