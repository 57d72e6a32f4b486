use std::iter;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Number(f64),
    Operator(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    NumberParseError(String),
    UnexpectedCharacter(char),
}

impl std::fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenizerError::NumberParseError(lit) => {
                write!(f, "Failed to parse number: '{}'", lit)
            }
            TokenizerError::UnexpectedCharacter(c) => write!(f, "Unexpected character: '{}'", c),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TokenizedInput(pub Vec<Token>);

impl std::ops::Deref for TokenizedInput {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for TokenizedInput {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, input: &str) -> Result<TokenizedInput, TokenizerError> {
        use Token::*;

        let mut tokens = Vec::new();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '0'..='9' | '.' => {
                    let literal: String = iter::once(c)
                        .chain(iter::from_fn(|| {
                            chars
                                .by_ref()
                                .next_if(|c| c.is_ascii_digit() || *c == '.')
                        }))
                        .collect();
                    let num: f64 = literal
                        .parse()
                        .map_err(|_| TokenizerError::NumberParseError(literal))?;
                    tokens.push(Number(num));
                }
                '+' | '-' | '*' | '/' | '^' | '(' | ')' => tokens.push(Operator(c)),
                c if c.is_whitespace() => {}
                _ => {
                    return Err(TokenizerError::UnexpectedCharacter(c));
                }
            }
        }

        Ok(TokenizedInput(tokens))
    }
}
