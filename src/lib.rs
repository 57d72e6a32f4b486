pub mod error;
pub mod rpn_converter;
pub mod rpn_evaluator;
pub mod tokenizer;
