// src/expressions/parser.rs

//! Tokenizer and recursive-descent parser for formula text.
//!
//! Grammar (whitespace ignored):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '×' | '·' | '/') unary)*
//! unary  := '-' unary | '+' unary | '√' unary | power
//! power  := atom (('^' | '**') unary)?
//! atom   := number | constant | function '(' expr ')' | '(' expr ')'
//! ```
//!
//! `^` is right-associative and binds tighter than unary minus, so `-2^2`
//! is `-4` and `2^3^2` is `512`.

use super::{Expr, Function};
use crate::core::{Constant, Result, ShovelcatError};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Root,
    LParen,
    RParen,
}

#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    position: usize,
}

fn parse_error(position: usize, message: impl Into<String>) -> ShovelcatError {
    ShovelcatError::Parse {
        position,
        message: message.into(),
    }
}

fn tokenize(text: &str) -> Result<Vec<Spanned>> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start = i;
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' | '−' => Token::Minus,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Token::Caret
            }
            '*' | '×' | '·' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '√' => Token::Root,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let number = scan_number(&chars, &mut i);
                let value = number
                    .parse::<f64>()
                    .map_err(|_| parse_error(start, format!("invalid number '{}'", number)))?;
                tokens.push(Spanned {
                    token: Token::Number(value),
                    position: start,
                });
                continue;
            }
            c if c.is_alphabetic() => {
                let mut ident = String::new();
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    ident.push(chars[i]);
                    i += 1;
                }
                tokens.push(Spanned {
                    token: Token::Ident(ident),
                    position: start,
                });
                continue;
            }
            other => return Err(parse_error(start, format!("unexpected character '{}'", other))),
        };
        tokens.push(Spanned { token, position: start });
        i += 1;
    }
    Ok(tokens)
}

/// Scans digits, an optional fraction, and an optional exponent. An `e` only
/// starts an exponent when a digit (optionally signed) follows, so `2e` stays
/// "2 then the constant e" and is rejected later by the grammar.
fn scan_number(chars: &[char], i: &mut usize) -> String {
    let mut number = String::new();
    while *i < chars.len() && (chars[*i].is_ascii_digit() || chars[*i] == '.') {
        number.push(chars[*i]);
        *i += 1;
    }
    if *i < chars.len() && (chars[*i] == 'e' || chars[*i] == 'E') {
        let mut lookahead = *i + 1;
        if lookahead < chars.len() && (chars[lookahead] == '+' || chars[lookahead] == '-') {
            lookahead += 1;
        }
        if lookahead < chars.len() && chars[lookahead].is_ascii_digit() {
            number.extend(&chars[*i..lookahead]);
            *i = lookahead;
            while *i < chars.len() && chars[*i].is_ascii_digit() {
                number.push(chars[*i]);
                *i += 1;
            }
        }
    }
    number
}

struct Parser {
    tokens: Vec<Spanned>,
    cursor: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|s| &s.token)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.cursor).map_or(self.end, |s| s.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).map(|s| s.token.clone());
        self.cursor += 1;
        token
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<()> {
        let position = self.position();
        match self.advance() {
            Some(ref t) if *t == expected => Ok(()),
            Some(t) => Err(parse_error(position, format!("expected {}, found {:?}", what, t))),
            None => Err(parse_error(position, format!("expected {}, found end of input", what))),
        }
    }

    fn expr(&mut self) -> Result<Expr> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    lhs = lhs + self.term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    lhs = lhs - self.term()?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Expr> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    lhs = lhs * self.unary()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    lhs = lhs / self.unary()?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<Expr> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            Some(Token::Root) => {
                self.advance();
                Ok(self.unary()?.sqrt())
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr> {
        let base = self.atom()?;
        if self.peek() == Some(&Token::Caret) {
            self.advance();
            let exponent = self.unary()?;
            return Ok(base.pow(exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr> {
        let position = self.position();
        match self.advance() {
            Some(Token::Number(v)) => Ok(Expr::Num(v)),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            Some(Token::Ident(name)) => {
                if let Some(function) = Function::lookup(&name) {
                    self.expect(Token::LParen, &format!("'(' after {}", function.name()))?;
                    let arg = self.expr()?;
                    self.expect(Token::RParen, "')'")?;
                    return Ok(arg.apply(function));
                }
                Constant::lookup(&name)
                    .map(Expr::Const)
                    .ok_or_else(|| parse_error(position, format!("unknown identifier '{}'", name)))
            }
            Some(t) => Err(parse_error(position, format!("unexpected token {:?}", t))),
            None => Err(parse_error(position, "unexpected end of input")),
        }
    }
}

/// Parses formula text into an [`Expr`].
pub(crate) fn parse(text: &str) -> Result<Expr> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(parse_error(0, "empty formula"));
    }
    let mut parser = Parser {
        tokens,
        cursor: 0,
        end: text.chars().count(),
    };
    let expr = parser.expr()?;
    if parser.cursor < parser.tokens.len() {
        return Err(parse_error(parser.position(), "unexpected trailing input"));
    }
    Ok(expr)
}
