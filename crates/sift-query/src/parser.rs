//! Keyword expression parser.
//!
//! Parses a token stream into a `KeywordExpr` using recursive descent.
//!
//! # Grammar
//!
//! ```text
//! expr       → or_expr
//! or_expr    → and_expr ("OR" and_expr)*
//! and_expr   → unary ("AND"? unary)*
//! unary      → "-" unary | primary
//! primary    → TERM | PHRASE | "(" or_expr ")"
//! ```
//!
//! # Precedence (highest to lowest)
//!
//! 1. Grouping: `(...)`
//! 2. Negation: `-`
//! 3. AND (explicit or implicit between adjacent keywords)
//! 4. OR

use std::mem;

use crate::{
    ast::KeywordExpr,
    error::{ParseError, QueryError},
    lexer::{Token, tokenize},
};

/// Recursive descent parser for keyword expressions.
struct Parser {
    /// Token stream to parse.
    tokens: Vec<Token>,
    /// Current position in token stream.
    position: usize,
}

impl Parser {
    /// Creates a new parser from a token stream.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses the token stream into an expression.
    fn parse(mut self) -> Result<Option<KeywordExpr>, ParseError> {
        if self.tokens.is_empty() {
            return Ok(None);
        }

        let expr = self.parse_or_expr()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::new(
                format!("unexpected token: {token:?}"),
                Some(self.position),
            ));
        }

        Ok(Some(expr))
    }

    /// Parses: or_expr → and_expr ("OR" and_expr)*
    fn parse_or_expr(&mut self) -> Result<KeywordExpr, ParseError> {
        let mut left = self.parse_and_expr()?;

        while self.check(&Token::Or) {
            self.advance();
            let right = self.parse_and_expr()?;
            left = KeywordExpr::or(vec![left, right]);
        }

        Ok(left)
    }

    /// Parses: and_expr → unary ("AND"? unary)*
    fn parse_and_expr(&mut self) -> Result<KeywordExpr, ParseError> {
        let mut exprs = vec![self.parse_unary()?];

        loop {
            if self.check(&Token::And) {
                self.advance();
                exprs.push(self.parse_unary()?);
            } else if self.can_start_unary() {
                exprs.push(self.parse_unary()?);
            } else {
                break;
            }
        }

        Ok(KeywordExpr::and(exprs))
    }

    /// Checks if the current token can start a unary expression.
    fn can_start_unary(&self) -> bool {
        matches!(
            self.peek(),
            Some(Token::Term(_) | Token::Phrase(_) | Token::Not | Token::LParen)
        )
    }

    /// Parses: unary → "-" unary | primary
    fn parse_unary(&mut self) -> Result<KeywordExpr, ParseError> {
        if self.check(&Token::Not) {
            self.advance();
            let expr = self.parse_unary()?;
            return Ok(KeywordExpr::Not(Box::new(expr)));
        }

        self.parse_primary()
    }

    /// Parses: primary → TERM | PHRASE | "(" or_expr ")"
    fn parse_primary(&mut self) -> Result<KeywordExpr, ParseError> {
        match self.peek().cloned() {
            Some(Token::Term(text) | Token::Phrase(text)) => {
                self.advance();
                Ok(KeywordExpr::Keyword(text))
            }
            Some(Token::LParen) => {
                self.advance();
                let inner = self.parse_or_expr()?;
                if !self.check(&Token::RParen) {
                    return Err(ParseError::new(
                        "expected closing parenthesis",
                        Some(self.position),
                    ));
                }
                self.advance();
                Ok(inner)
            }
            Some(Token::RParen) => Err(ParseError::new(
                "unexpected closing parenthesis",
                Some(self.position),
            )),
            Some(Token::Or) => Err(ParseError::new(
                "unexpected OR (needs a keyword before it)",
                Some(self.position),
            )),
            Some(Token::And) => Err(ParseError::new(
                "unexpected AND (needs a keyword before it)",
                Some(self.position),
            )),
            Some(Token::Not) => Err(ParseError::new("unexpected negation", Some(self.position))),
            None => Err(ParseError::new("unexpected end of expression", None)),
        }
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Checks if the current token has the same variant as the given token.
    fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| mem::discriminant(t) == mem::discriminant(token))
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

/// Parses a keyword expression string.
///
/// Returns `Ok(None)` for blank input, `Ok(Some(expr))` for valid expressions,
/// or `Err(QueryError)` for invalid syntax.
pub fn parse(input: &str) -> Result<Option<KeywordExpr>, QueryError> {
    let tokens = tokenize(input)?;
    Parser::new(tokens)
        .parse()
        .map_err(|e| QueryError::from(e).with_query(input))
}
