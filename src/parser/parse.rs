//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: error types, helper methods, the statement production,
//! and the [`compile`] entry point that runs both phases.
//!
//! # Grammar
//!
//! ```text
//! Program    → Statement*
//! Statement  → IDENTIFIER ':=' Expression
//! Expression → Term (('+' | '-') Term)*
//! Term       → Factor (('*' | '/') Factor)*
//! Factor     → Primary ('^' Factor)?
//! Primary    → IDENTIFIER | INTEGER | REAL
//! ```
//!
//! Expression-level productions live in `expressions.rs` as `pub(crate)`
//! methods on the [`Parser`] struct, mirroring how the grammar splits into
//! precedence levels.

use crate::parser::ast::{Program, SourceLocation, Statement};
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use thiserror::Error;

/// Syntax error: the current token violated a grammar production.
///
/// Carries the position of the token that failed expectations, or of the
/// last token when input ended prematurely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error at {location}: {message}")]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

/// Any way a compilation attempt can fail.
///
/// Both phases are fail-fast: the first error aborts the attempt, and only
/// the top-level driver turns it into a user-visible report.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] ParseError),
}

/// Run both phases over `source`: tokenize, then parse.
pub fn compile(source: &str) -> Result<Program, CompileError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;

    let mut parser = Parser::new(&tokens);
    Ok(parser.parse_program()?)
}

/// Recursive descent parser for the Mini grammar
///
/// Borrows the token sequence read-only and walks it with a monotonically
/// increasing cursor and one token of lookahead.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program (a sequence of assignment statements).
    ///
    /// An empty token sequence yields a program with no statements.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let location = self
            .tokens
            .first()
            .map(|token| token.location)
            .unwrap_or_else(|| SourceLocation::new(1, 1));

        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(Program {
            statements,
            location,
        })
    }

    /// Statement → IDENTIFIER ':=' Expression
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let identifier = self.consume(
            TokenKind::Identifier,
            "Expected identifier at the start of a statement",
        )?;

        self.consume(
            TokenKind::Assignment,
            &format!("Expected ':=' after identifier '{}'", identifier.lexeme),
        )?;

        let expr = self.parse_expression()?;

        Ok(Statement::Assignment {
            identifier: identifier.lexeme.clone(),
            expr,
            location: identifier.location,
        })
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn previous(&self) -> &'a Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().map_or(false, |token| token.kind == kind)
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Match an `Operator` token whose lexeme is one of `ops`.
    pub(crate) fn match_operator(&mut self, ops: &[&str]) -> bool {
        match self.current() {
            Some(token)
                if token.kind == TokenKind::Operator
                    && ops.contains(&token.lexeme.as_str()) =>
            {
                self.advance();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn consume(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Error anchored at the current token, or at the last token when input
    /// is exhausted.
    pub(crate) fn error_at_current(&self, message: &str) -> ParseError {
        match self.current() {
            Some(token) => ParseError {
                message: format!("{}, found {}", message, token),
                location: token.location,
            },
            None => ParseError {
                message: format!("{}, found end of input", message),
                location: self.last_location(),
            },
        }
    }

    pub(crate) fn last_location(&self) -> SourceLocation {
        self.tokens
            .last()
            .map(|token| token.location)
            .unwrap_or_else(|| SourceLocation::new(1, 1))
    }
}
