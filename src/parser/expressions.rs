//! Expression parsing implementation
//!
//! One method per precedence level, lowest binding first:
//!
//! - [`parse_expression`](Parser::parse_expression): `+` and `-`
//! - `parse_term`: `*` and `/`
//! - `parse_factor`: `^`
//! - `parse_primary`: identifiers and number literals
//!
//! The two lower levels loop over `(operator operand)*` and left-fold into a
//! left-leaning tree, which makes `+ - * /` left-associative. `parse_factor`
//! instead recurses into itself for the right operand, so `^` chains lean
//! right: `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`.

use crate::parser::ast::Expression;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Expression → Term (('+' | '-') Term)*
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;

        while self.match_operator(&["+", "-"]) {
            let op = self.previous();
            let right = self.parse_term()?;
            left = Expression::Binary {
                operator: op.lexeme.clone(),
                left: Box::new(left),
                right: Box::new(right),
                location: op.location,
            };
        }

        Ok(left)
    }

    /// Term → Factor (('*' | '/') Factor)*
    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_factor()?;

        while self.match_operator(&["*", "/"]) {
            let op = self.previous();
            let right = self.parse_factor()?;
            left = Expression::Binary {
                operator: op.lexeme.clone(),
                left: Box::new(left),
                right: Box::new(right),
                location: op.location,
            };
        }

        Ok(left)
    }

    /// Factor → Primary ('^' Factor)?
    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        let base = self.parse_primary()?;

        if self.match_operator(&["^"]) {
            let op = self.previous();
            let exponent = self.parse_factor()?;
            return Ok(Expression::Binary {
                operator: op.lexeme.clone(),
                left: Box::new(base),
                right: Box::new(exponent),
                location: op.location,
            });
        }

        Ok(base)
    }

    /// Primary → IDENTIFIER | INTEGER | REAL
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        if self.match_kind(TokenKind::Integer) {
            let token = self.previous();
            return Ok(Expression::Number {
                lexeme: token.lexeme.clone(),
                is_real: false,
                location: token.location,
            });
        }

        if self.match_kind(TokenKind::Real) {
            let token = self.previous();
            return Ok(Expression::Number {
                lexeme: token.lexeme.clone(),
                is_real: true,
                location: token.location,
            });
        }

        if self.match_kind(TokenKind::Identifier) {
            let token = self.previous();
            return Ok(Expression::Identifier {
                name: token.lexeme.clone(),
                location: token.location,
            });
        }

        if self.is_at_end() {
            return Err(ParseError {
                message: "Unexpected end of input while parsing expression".to_string(),
                location: self.last_location(),
            });
        }

        Err(self.error_at_current("Expected expression (identifier or number)"))
    }
}
