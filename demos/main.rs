use std::env;
use std::process::exit;

use infix_evaluator::rpn_converter::{RPNExpr, RpnConverter};
use infix_evaluator::rpn_evaluator::RpnEvaluator;
use infix_evaluator::tokenizer::{Token, Tokenizer};

fn pretty_print_rpn(tokens: &RPNExpr) -> String {
    let mut result = String::new();

    for token in tokens.iter() {
        match token {
            Token::Number(n) => result.push_str(&n.to_string()),
            Token::Operator(op) => result.push(*op),
        }
        result.push(' ');
    }

    result.trim_end().to_string()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <expression>", args[0]);
        exit(1);
    }

    let input = args[1].clone();

    let tokenizer = Tokenizer::new();
    let tokens = match tokenizer.tokenize(&input) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Failed to tokenize the input: {}", e);
            exit(1);
        }
    };

    let rpn = match RpnConverter::to_postfix(&tokens) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Failed to convert the input to RPN: {}", e);
            exit(1);
        }
    };

    println!("RPN: {}", pretty_print_rpn(&rpn));

    match RpnEvaluator::evaluate(&rpn) {
        Ok(result) => println!("{} = {}", input.trim(), result),
        Err(e) => {
            eprintln!("Failed to evaluate the RPN expression: {}", e);
            exit(1);
        }
    }
}
