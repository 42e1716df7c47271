use std::iter::Peekable;
use std::str::Chars;

use tracing::{trace, warn};

pub use token::*;

mod token;

/// Characters after which a `-` is a unary minus instead of a subtraction.
const UNARY_PRECEDERS: [char; 5] = ['(', '*', '+', '/', '-'];

struct Lexer<'a> {
    tokens: Vec<Token>,
    chars: Peekable<Chars<'a>>,
    current: Option<char>,
    prev: Option<char>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: Vec::new(),
            chars: input.chars().peekable(),
            current: None,
            prev: None,
        }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.prev = self.current.replace(c);
        Some(c)
    }

    fn next_if(&mut self, f: impl FnOnce(&char) -> bool) -> Option<char> {
        match self.chars.peek() {
            Some(c) if f(c) => self.next(),
            _ => None,
        }
    }

    /// Whether a `-` read just now starts a negation.
    fn unary_position(&self) -> bool {
        self.prev.map_or(true, |p| UNARY_PRECEDERS.contains(&p))
    }

    /// Reads a whole run of digits. Runs longer than an `f64` can hold
    /// exactly round to the nearest value, like `1e23` for 23 nines.
    fn number(&mut self, first: char) -> f64 {
        let mut literal = String::from(first);
        while let Some(c) = self.next_if(char::is_ascii_digit) {
            literal.push(c);
        }

        match literal.parse() {
            Ok(n) => n,
            // a run of ascii digits always parses
            Err(e) => {
                warn!(%literal, error = %e, "invalid number literal");
                f64::NAN
            }
        }
    }
}

/// Splits `input` into tokens. Spaces are dropped, any character that is not
/// an operator, a parenthesis or a digit becomes a single character variable.
pub fn lex(input: &str) -> Vec<Token> {
    let input = input.replace(' ', "");
    let mut lexer = Lexer::new(&input);

    while let Some(c) = lexer.next() {
        let token = match c {
            '+' => Token::op(OpT::Add),
            '*' | '⋅' => Token::op(OpT::Mul),
            '/' => Token::op(OpT::Div),
            '-' if lexer.unary_position() => Token::op(OpT::Neg),
            '-' => Token::op(OpT::Sub),
            '(' => Token::par(ParT::Open),
            ')' => Token::par(ParT::Close),
            '0'..='9' => Token::num(lexer.number(c)),
            c => Token::var(c),
        };
        lexer.tokens.push(token);
    }

    trace!(count = lexer.tokens.len(), "lexed input");
    lexer.tokens
}
