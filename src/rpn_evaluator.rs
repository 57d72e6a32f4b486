use crate::error::EvalError;
use crate::rpn_converter::RPNExpr;

pub struct RpnEvaluator;

impl RpnEvaluator {
    /// Evaluates a token sequence already in postfix order.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN per
    /// IEEE-754 semantics, as does `^` with an invalid exponent domain.
    pub fn evaluate(tokens: &RPNExpr) -> Result<f64, EvalError> {
        use crate::tokenizer::Token::*;

        let mut eval_stack: Vec<f64> = vec![];

        for token in tokens.iter() {
            match token {
                Number(num) => {
                    eval_stack.push(*num);
                }
                Operator(op) => {
                    if eval_stack.len() < 2 {
                        return Err(EvalError::InsufficientOperands(*op));
                    }
                    let operand2 = eval_stack.pop().unwrap();
                    let operand1 = eval_stack.pop().unwrap();
                    let result = match op {
                        '+' => operand1 + operand2,
                        '-' => operand1 - operand2,
                        '*' => operand1 * operand2,
                        '/' => operand1 / operand2,
                        '^' => operand1.powf(operand2),
                        _ => return Err(EvalError::UnknownOperator(*op)),
                    };
                    eval_stack.push(result);
                }
            }
        }

        if eval_stack.len() != 1 {
            return Err(EvalError::InvalidPostfixExpression);
        }

        Ok(eval_stack[0])
    }
}
